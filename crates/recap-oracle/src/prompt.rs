//! Summarization prompt construction.

/// Build the summarization prompt for one closed window.
///
/// The instructions ask for a declarative account of object movements —
/// what each object or person did across the window — rather than a
/// restatement of individual annotations.
pub fn build_prompt(rendered: &str, range_label: &str, window_secs: u64) -> String {
    format!(
        "Analyze the following scene annotations from a {window_secs}-second \
window and produce a declarative summary of object movements.\n\
\n\
For each object or person in the scene, state its initial position, the \
path it moved along, and its final position — or note that it remained \
stationary. Name objects plainly (person, laptop, cup, phone, papers). \
Ignore colors, lighting, emotion, and static background detail.\n\
\n\
Annotations from {range_label}:\n\
{rendered}\n\
\n\
Declarative summary of object movements:"
    )
}

// ─── Tests ────────────────────────────────────────────────────────
