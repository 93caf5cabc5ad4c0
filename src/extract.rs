//! Structured extraction from generative model output.
//!
//! Summarization prompts ask the model for prose followed by a JSON array of
//! reminder objects, but models ad-lib around that shape. [`split`] separates
//! prose from structured data under a never-fails contract, degrading to
//! prose-only whenever the embedded fragment does not parse cleanly.

use serde::{Deserialize, Serialize};

/// One actionable item pulled out of a summary block.
///
/// Unknown fields in the source JSON are ignored; `date` and `time` are
/// optional and omitted from serialized output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Prose summary plus the reminders recovered from one generated block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Extraction {
    pub summary: String,
    pub reminders: Vec<Reminder>,
}

impl Extraction {
    /// Degraded result: the whole block as prose, no reminders.
    fn prose_only(block: &str) -> Self {
        Self {
            summary: block.trim().to_string(),
            reminders: Vec::new(),
        }
    }
}

/// Split one block of generated text into prose and reminders.
///
/// The candidate fragment runs from the first `[` to the last `]` in the
/// block, a deliberately greedy span rather than a minimal match. Callers
/// depend on the exact degradation behavior, so this must not be tightened
/// into a stricter parser.
///
/// The fragment must parse as a JSON array of objects, each carrying a
/// non-blank `event`. Anything else, including a block with no bracketed
/// fragment at all, yields the trimmed block as summary and no reminders.
/// This function never fails.
pub fn split(block: &str) -> Extraction {
    let Some(fragment) = bracket_span(block) else {
        return Extraction::prose_only(block);
    };

    let reminders: Vec<Reminder> = match serde_json::from_str(&block[fragment.clone()]) {
        Ok(reminders) => reminders,
        Err(e) => {
            tracing::warn!(error = %e, "generated fragment is not a reminder array");
            return Extraction::prose_only(block);
        }
    };

    // All-or-nothing validation: one blank event poisons the whole array
    if reminders.iter().any(|r| r.event.trim().is_empty()) {
        tracing::warn!("generated reminder with blank event, degrading to prose");
        return Extraction::prose_only(block);
    }

    let mut summary = String::with_capacity(block.len() - fragment.len());
    summary.push_str(&block[..fragment.start]);
    summary.push_str(&block[fragment.end..]);

    Extraction {
        summary: summary.trim().to_string(),
        reminders,
    }
}

/// Byte range of the greedy bracket span, if the block has one.
///
/// `[` and `]` are single-byte ASCII, so the returned bounds are always
/// valid char boundaries.
fn bracket_span(block: &str) -> Option<std::ops::Range<usize>> {
    let start = block.find('[')?;
    let end = block.rfind(']')?;

    if start < end { Some(start..end + 1) } else { None }
}
