//! Scorers for redesign brief evaluation.
//!
//! Each scorer grades one aspect of a generated brief:
//! - Section Completeness: does it include all required sections?
//! - Keyword Relevance: does it mention relevant keywords?
//! - Color Specificity: does it provide specific hex codes?
//! - Typography: does it suggest specific fonts?
//! - Comprehensiveness: is it long enough?
//! - Markdown Quality: is it well-formatted?
//! - Actionability: does it include implementation guidance?
//!
//! All scorers are pure, stateless, and bit-for-bit reproducible for the
//! same output text. The server never calls them; they back `brief-eval`.

pub mod fixtures;
pub mod scorers;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single scorer verdict: a score in [0, 1] plus diagnostic metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub name: &'static str,
    pub score: f64,
    pub metadata: Value,
}

/// Expectation metadata for one evaluation case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefExpectation {
    pub must_include_sections: Vec<String>,
    pub should_mention_keywords: Vec<String>,
    pub should_have_colors: bool,
    pub should_have_fonts: bool,
    pub min_length: usize,
}
