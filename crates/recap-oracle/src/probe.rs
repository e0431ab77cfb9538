//! Oracle candidate resolution.
//!
//! A configuration-resolution step, not runtime retry: each candidate is
//! probed once with a trivial prompt and the first that answers becomes the
//! engine's oracle. This finishes before the windowing engine starts; a
//! candidate that fails here is never consulted again.

use crate::error::OracleError;
use crate::oracle::SummaryOracle;

/// Prompt used for the one-shot candidate check.
pub const PROBE_PROMPT: &str = "Hello";

/// Model names tried, in order, when none is configured.
pub const DEFAULT_MODEL_CANDIDATES: [&str; 5] = [
    "gemini-2.0-flash",
    "gemini-2.5-flash",
    "gemini-2.0-flash-exp",
    "gemini-flash-latest",
    "gemini-pro-latest",
];

/// Probe candidates in order and return the first that answers.
pub fn resolve_oracle<O: SummaryOracle>(candidates: Vec<O>) -> Result<O, OracleError> {
    let total = candidates.len();

    for candidate in candidates {
        match candidate.probe() {
            Ok(()) => {
                tracing::info!("oracle '{}' accepted", candidate.name());
                return Ok(candidate);
            }
            Err(e) => {
                tracing::warn!("oracle '{}' rejected: {e}", candidate.name());
            }
        }
    }

    Err(OracleError::NoUsableOracle(total))
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Scripted {
        name: &'static str,
        works: bool,
    }

    impl SummaryOracle for Scripted {
        fn summarize(&self, _: &str, _: &str) -> Result<String, OracleError> {
            if self.works {
                Ok("ok".to_string())
            } else {
                Err(OracleError::EmptyOutput)
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn picks_first_working_candidate() {
        let resolved = resolve_oracle(vec![
            Scripted { name: "broken-a", works: false },
            Scripted { name: "good-b", works: true },
            Scripted { name: "good-c", works: true },
        ])
        .expect("one candidate works");
        assert_eq!(resolved.name(), "good-b");
    }

    #[test]
    fn all_failing_candidates_is_an_error() {
        let err = resolve_oracle(vec![
            Scripted { name: "a", works: false },
            Scripted { name: "b", works: false },
        ])
        .unwrap_err();
        assert!(matches!(err, OracleError::NoUsableOracle(2)));
    }

    #[test]
    fn empty_candidate_list_is_an_error() {
        let err = resolve_oracle(Vec::<Scripted>::new()).unwrap_err();
        assert!(matches!(err, OracleError::NoUsableOracle(0)));
    }
}
