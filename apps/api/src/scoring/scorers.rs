//! The seven brief scorers. Pure functions over `(output, expectation)`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::scoring::{BriefExpectation, Score};

/// Six-hex-digit color codes, e.g. `#1A2B3C`.
static HEX_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").unwrap());

/// Markdown heading lines of level 1-3.
static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,3}\s").unwrap());

/// Common web fonts a concrete typography recommendation would name.
const COMMON_FONTS: [&str; 12] = [
    "inter",
    "roboto",
    "helvetica",
    "arial",
    "georgia",
    "times",
    "playfair",
    "lato",
    "montserrat",
    "open sans",
    "poppins",
    "raleway",
];

/// Keywords whose presence signals implementation guidance.
const ACTIONABILITY_KEYWORDS: [&str; 7] = [
    "implement",
    "use this prompt",
    "copy",
    "designer",
    "developer",
    "chatgpt",
    "claude",
];

/// score = 1 − missing/total, case-insensitive substring match per section.
pub fn section_completeness(output: &str, expected: &BriefExpectation) -> Score {
    let output = output.to_lowercase();
    let total = expected.must_include_sections.len();
    let missing = expected
        .must_include_sections
        .iter()
        .filter(|section| !output.contains(&section.to_lowercase()))
        .count();

    let score = if total == 0 {
        1.0
    } else {
        1.0 - (missing as f64 / total as f64)
    };

    Score {
        name: "Section Completeness",
        score,
        metadata: json!({
            "missingSections": missing,
            "totalRequired": total
        }),
    }
}

/// score = keywords found / keywords expected, case-insensitive.
pub fn keyword_relevance(output: &str, expected: &BriefExpectation) -> Score {
    let output = output.to_lowercase();
    let total = expected.should_mention_keywords.len();
    let mentioned = expected
        .should_mention_keywords
        .iter()
        .filter(|keyword| output.contains(&keyword.to_lowercase()))
        .count();

    let score = if total == 0 {
        1.0
    } else {
        mentioned as f64 / total as f64
    };

    Score {
        name: "Keyword Relevance",
        score,
        metadata: json!({
            "mentioned": mentioned,
            "total": total,
            "keywords": expected.should_mention_keywords
        }),
    }
}

/// Counts hex color codes: ≥3 → 1, 1-2 → 0.5, 0 → 0.
/// Automatic pass when the case does not call for colors.
pub fn color_specificity(output: &str, expected: &BriefExpectation) -> Score {
    if !expected.should_have_colors {
        return Score {
            name: "Color Specificity",
            score: 1.0,
            metadata: json!({}),
        };
    }

    let codes: Vec<&str> = HEX_CODE.find_iter(output).map(|m| m.as_str()).collect();
    let score = if codes.len() >= 3 {
        1.0
    } else if !codes.is_empty() {
        0.5
    } else {
        0.0
    };

    Score {
        name: "Color Specificity",
        score,
        metadata: json!({
            "hexCodesFound": codes.len(),
            "examples": codes.iter().take(3).collect::<Vec<_>>()
        }),
    }
}

/// Membership test against the common-font list: ≥2 → 1, 1 → 0.5, 0 → 0.
/// Automatic pass when the case does not call for fonts.
pub fn typography(output: &str, expected: &BriefExpectation) -> Score {
    if !expected.should_have_fonts {
        return Score {
            name: "Typography",
            score: 1.0,
            metadata: json!({}),
        };
    }

    let output = output.to_lowercase();
    let fonts: Vec<&str> = COMMON_FONTS
        .iter()
        .copied()
        .filter(|font| output.contains(font))
        .collect();

    let score = if fonts.len() >= 2 {
        1.0
    } else if fonts.len() == 1 {
        0.5
    } else {
        0.0
    };

    Score {
        name: "Typography",
        score,
        metadata: json!({
            "fontsFound": fonts.len(),
            "examples": fonts.iter().take(3).collect::<Vec<_>>()
        }),
    }
}

/// score = word count ÷ minimum required, capped at 1.
pub fn comprehensiveness(output: &str, expected: &BriefExpectation) -> Score {
    let word_count = output.split_whitespace().count();
    let min_words = expected.min_length;

    let score = if min_words == 0 {
        1.0
    } else {
        (word_count as f64 / min_words as f64).min(1.0)
    };

    Score {
        name: "Comprehensiveness",
        score,
        metadata: json!({
            "wordCount": word_count,
            "minimumRequired": min_words,
            "percentOfTarget": if min_words == 0 {
                100
            } else {
                (word_count as f64 / min_words as f64 * 100.0).round() as u64
            }
        }),
    }
}

/// Weighted structure check: ≥3 heading lines 0.4, bullets 0.3, bold 0.3.
pub fn markdown_quality(output: &str) -> Score {
    let has_headers = HEADING_LINE.find_iter(output).count() >= 3;
    let has_bullets = output.contains("- ") || output.contains("* ");
    let has_bold = output.contains("**");

    let mut score = 0.0;
    if has_headers {
        score += 0.4;
    }
    if has_bullets {
        score += 0.3;
    }
    if has_bold {
        score += 0.3;
    }

    Score {
        name: "Markdown Quality",
        score,
        metadata: json!({
            "hasHeaders": has_headers,
            "hasBullets": has_bullets,
            "hasBold": has_bold
        }),
    }
}

/// Binary: any implementation-guidance keyword present.
pub fn actionability(output: &str) -> Score {
    let output = output.to_lowercase();
    let has_guidance = ACTIONABILITY_KEYWORDS
        .iter()
        .any(|keyword| output.contains(keyword));

    Score {
        name: "Actionability",
        score: if has_guidance { 1.0 } else { 0.0 },
        metadata: json!({
            "hasImplementationGuidance": has_guidance
        }),
    }
}

/// Runs every scorer against one brief. Order matches the report layout.
pub fn score_brief(output: &str, expected: &BriefExpectation) -> Vec<Score> {
    vec![
        section_completeness(output, expected),
        keyword_relevance(output, expected),
        color_specificity(output, expected),
        typography(output, expected),
        comprehensiveness(output, expected),
        markdown_quality(output),
        actionability(output),
    ]
}
