//! DigestOracle: deterministic offline condenser.
//!
//! Used when no model is configured, and as the scripted oracle in engine
//! tests. Collapses runs of identical annotations into "phases" and reports
//! how the window opened and closed — no subprocess, no network.

use crate::error::OracleError;
use crate::oracle::SummaryOracle;

pub struct DigestOracle;

impl SummaryOracle for DigestOracle {
    fn summarize(&self, rendered: &str, _range_label: &str) -> Result<String, OracleError> {
        Ok(digest(rendered))
    }

    fn name(&self) -> &str {
        "digest"
    }
}

/// Strip the `[HH:MM:SS] ` display prefix from a rendered line.
fn annotation_text(line: &str) -> &str {
    line.split_once("] ")
        .map(|(_, text)| text)
        .unwrap_or(line)
        .trim()
}

fn digest(rendered: &str) -> String {
    let mut phases: Vec<&str> = Vec::new();
    let mut total = 0usize;

    for line in rendered.lines() {
        let text = annotation_text(line);
        if text.is_empty() {
            continue;
        }
        total += 1;
        if phases.last().copied() != Some(text) {
            phases.push(text);
        }
    }

    match phases.as_slice() {
        [] => "no describable activity".to_string(),
        [only] => format!("steady scene: {only}"),
        [first, .., last] => format!(
            "{total} annotations over {} phases; opened with \"{first}\", closed with \"{last}\"",
            phases.len()
        ),
    }
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_consecutive_duplicates_into_phases() {
        let rendered = "[12:00:00] a person sits\n\
                        [12:00:01] a person sits\n\
                        [12:00:02] the person stands\n\
                        [12:00:03] the person leaves";
        let out = DigestOracle.summarize(rendered, "12:00:00 - 12:00:30").expect("ok");
        assert_eq!(
            out,
            "4 annotations over 3 phases; opened with \"a person sits\", closed with \"the person leaves\""
        );
    }

    #[test]
    fn single_phase_reports_steady_scene() {
        let rendered = "[12:00:00] an empty desk\n[12:00:15] an empty desk";
        let out = DigestOracle.summarize(rendered, "x").expect("ok");
        assert_eq!(out, "steady scene: an empty desk");
    }

    #[test]
    fn blank_annotations_yield_no_describable_activity() {
        let out = DigestOracle.summarize("[12:00:00] ", "x").expect("ok");
        assert_eq!(out, "no describable activity");
        let out = DigestOracle.summarize("", "x").expect("ok");
        assert_eq!(out, "no describable activity");
    }

    #[test]
    fn default_probe_succeeds() {
        assert!(DigestOracle.probe().is_ok());
        assert_eq!(DigestOracle.name(), "digest");
    }
}
