//! Response Normalizer — turns whatever the model said into a `TicketSummary`.
//!
//! This is a total function: any input string, including empty text, plain
//! prose, or JSON with missing keys, produces a fully-populated record.
//! A parse failure is absorbed into a manual-review default, never an error.
//!
//! Models vary their key casing between runs, so each field is resolved
//! through an ordered candidate-key table. The order is part of the contract:
//! first present, non-empty string wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ticket priority. Anything the model returns outside these three levels
/// normalizes to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Case-insensitive match against the three allowed levels.
    fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("low") {
            Some(Priority::Low)
        } else if s.eq_ignore_ascii_case("medium") {
            Some(Priority::Medium)
        } else if s.eq_ignore_ascii_case("high") {
            Some(Priority::High)
        } else {
            None
        }
    }
}

/// Structured result of summarizing one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub summary: String,
    pub priority: Priority,
    #[serde(rename = "suggestedAction")]
    pub suggested_action: String,
}

// Candidate keys, tried in order. Keep the precedence auditable here rather
// than buried in conditionals.
const SUMMARY_KEYS: [&str; 2] = ["summary", "Summary"];
const PRIORITY_KEYS: [&str; 2] = ["priority", "Priority"];
const ACTION_KEYS: [&str; 3] = ["suggestedAction", "suggested_action", "action"];

/// Normalizes raw reply text into a `TicketSummary`. Never fails.
///
/// - Valid JSON object: fields resolved via the candidate-key tables;
///   missing summary/action default to `""`, missing or out-of-enum
///   priority defaults to `medium`.
/// - Valid non-object JSON: treated as an object with no keys.
/// - Not JSON at all: the text becomes the summary verbatim and the ticket
///   is flagged for manual review.
pub fn normalize_summary(text: &str) -> TicketSummary {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            let fields = value.as_object();
            TicketSummary {
                summary: first_string(fields, &SUMMARY_KEYS).unwrap_or_default(),
                priority: first_string(fields, &PRIORITY_KEYS)
                    .and_then(|p| Priority::parse(&p))
                    .unwrap_or_default(),
                suggested_action: first_string(fields, &ACTION_KEYS).unwrap_or_default(),
            }
        }
        Err(_) => TicketSummary {
            summary: text.to_string(),
            priority: Priority::Medium,
            suggested_action: "Review ticket manually".to_string(),
        },
    }
}

/// Returns the first non-empty string value among `keys`, in order.
fn first_string(fields: Option<&Map<String, Value>>, keys: &[&str]) -> Option<String> {
    let fields = fields?;
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
