//! Final report rendering.

use recap_core::{Timeline, final_report};

/// Render the end-of-run report as a text banner.
pub fn render_text_report(timeline: &Timeline) -> String {
    let report = final_report(timeline);
    if report.is_empty() {
        return "no completed windows to report".to_string();
    }

    let mut out = String::new();
    out.push_str(&"=".repeat(64));
    out.push_str("\nANNOTATION SUMMARY REPORT\n");
    out.push_str(&"=".repeat(64));

    for (i, entry) in report.iter().enumerate() {
        out.push_str(&format!("\n\nwindow {}: {}", i + 1, entry.range));
        out.push_str(&format!("\nannotations: {}", entry.annotation_count));
        match entry.summary {
            Some(ref summary) => out.push_str(&format!("\nsummary: {summary}")),
            None => out.push_str("\nsummary: (not available)"),
        }
    }

    if timeline.dropped() > 0 {
        out.push_str(&format!("\n\ndropped annotations: {}", timeline.dropped()));
    }

    out
}

/// Print the final report, as text or JSON.
pub fn print_final_report(timeline: &Timeline, json: bool) -> anyhow::Result<()> {
    if json {
        let report = final_report(timeline);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text_report(timeline));
    }
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use recap_core::Annotation;

    fn sealed_timeline() -> Timeline {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut tl = Timeline::new(TimeDelta::seconds(30)).expect("positive");
        tl.ingest(Annotation::new("a person waves", base));
        let jobs = tl.tick(base + TimeDelta::seconds(30));
        tl.apply_summary(jobs[0].seq, "a person waved and left".to_string());
        tl
    }

    #[test]
    fn text_report_lists_each_window() {
        let tl = sealed_timeline();
        let text = render_text_report(&tl);
        assert!(text.contains("ANNOTATION SUMMARY REPORT"));
        assert!(text.contains("window 1: 12:00:00 - 12:00:30"));
        assert!(text.contains("annotations: 1"));
        assert!(text.contains("summary: a person waved and left"));
        assert!(!text.contains("dropped annotations"));
    }

    #[test]
    fn text_report_counts_drops() {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut tl = Timeline::new(TimeDelta::seconds(30)).expect("positive");
        tl.ingest(Annotation::new("origin", base));
        tl.ingest(Annotation::new("late", base + TimeDelta::seconds(45)));
        tl.tick(base + TimeDelta::seconds(30));
        let text = render_text_report(&tl);
        assert!(text.contains("dropped annotations: 1"));
    }

    #[test]
    fn empty_timeline_reports_nothing_to_show() {
        let tl = Timeline::new(TimeDelta::seconds(30)).expect("positive");
        assert_eq!(render_text_report(&tl), "no completed windows to report");
    }
}
