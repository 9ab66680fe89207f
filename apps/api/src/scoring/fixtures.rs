//! Evaluation cases for the redesign brief pipeline.
//!
//! Five scenarios across different business types; the restaurant case feeds
//! minimal input to exercise every placeholder default.

use crate::brief::generator::RedesignInput;
use crate::scoring::BriefExpectation;

/// One evaluation case: questionnaire input plus expectation metadata.
#[derive(Debug, Clone)]
pub struct EvalCase {
    pub name: &'static str,
    pub input: RedesignInput,
    pub expected: BriefExpectation,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn test_cases() -> Vec<EvalCase> {
    vec![
        EvalCase {
            name: "E-commerce - Handmade Jewelry",
            input: RedesignInput {
                website_url: "example-jewelry.com".to_string(),
                business_description: "Sell handmade jewelry online to young professionals"
                    .to_string(),
                main_goal: "Increase sales/conversions".to_string(),
                target_audience: "Young professionals (25-35)".to_string(),
                not_working: strings(&[
                    "Looks outdated/unprofessional",
                    "Not mobile-friendly",
                    "Low conversions/poor CTAs",
                ]),
                is_working: strings(&["Good content", "Strong brand recognition"]),
                desired_feeling: "Premium & exclusive".to_string(),
                visual_style: "Modern & minimal".to_string(),
                current_platform: "Shopify".to_string(),
                inspiration_sites: "https://mejuri.com, https://auratenewyork.com".to_string(),
            },
            expected: BriefExpectation {
                must_include_sections: strings(&[
                    "Executive Summary",
                    "Visual Design Direction",
                    "Strategic Recommendations",
                ]),
                should_mention_keywords: strings(&[
                    "mobile",
                    "conversion",
                    "premium",
                    "trust",
                    "checkout",
                ]),
                should_have_colors: true,
                should_have_fonts: true,
                min_length: 500,
            },
        },
        EvalCase {
            name: "SaaS - Project Management Tool",
            input: RedesignInput {
                website_url: "project-tool.io".to_string(),
                business_description: "B2B project management software for remote teams"
                    .to_string(),
                main_goal: "Generate more leads".to_string(),
                target_audience: "Business decision-makers (35-55)".to_string(),
                not_working: strings(&[
                    "Confusing navigation",
                    "Hard to find information",
                    "Poor visual design",
                ]),
                is_working: strings(&["Clear value proposition", "Good SEO"]),
                desired_feeling: "Professional & trustworthy".to_string(),
                visual_style: "Tech & futuristic".to_string(),
                current_platform: "Custom/coded".to_string(),
                inspiration_sites: "https://linear.app, https://notion.so".to_string(),
            },
            expected: BriefExpectation {
                must_include_sections: strings(&[
                    "Executive Summary",
                    "Strategic Recommendations",
                    "Priority Roadmap",
                ]),
                should_mention_keywords: strings(&[
                    "navigation",
                    "lead generation",
                    "B2B",
                    "demo",
                    "trial",
                ]),
                should_have_colors: true,
                should_have_fonts: true,
                min_length: 500,
            },
        },
        EvalCase {
            name: "Portfolio - Freelance Designer",
            input: RedesignInput {
                business_description: "Freelance UX designer showcasing client work".to_string(),
                main_goal: "Build brand credibility".to_string(),
                target_audience: "Creative professionals".to_string(),
                not_working: strings(&["Slow loading speed", "Cluttered layout"]),
                is_working: strings(&["Strong brand recognition", "Good content"]),
                desired_feeling: "Creative & innovative".to_string(),
                visual_style: "Bold & colorful".to_string(),
                current_platform: "Webflow".to_string(),
                ..Default::default()
            },
            expected: BriefExpectation {
                must_include_sections: strings(&[
                    "Visual Design Direction",
                    "Content & Messaging",
                ]),
                should_mention_keywords: strings(&[
                    "portfolio",
                    "case studies",
                    "creative",
                    "bold",
                ]),
                should_have_colors: true,
                should_have_fonts: true,
                min_length: 400,
            },
        },
        EvalCase {
            name: "Minimal Input - New Restaurant",
            input: RedesignInput {
                business_description: "New Italian restaurant in downtown".to_string(),
                main_goal: "Modernize outdated appearance".to_string(),
                current_platform: "Wix".to_string(),
                ..Default::default()
            },
            expected: BriefExpectation {
                must_include_sections: strings(&["Executive Summary"]),
                should_mention_keywords: strings(&["restaurant", "italian"]),
                should_have_colors: true,
                should_have_fonts: false,
                min_length: 300,
            },
        },
        EvalCase {
            name: "Agency - Marketing Consultancy",
            input: RedesignInput {
                website_url: "marketing-agency.com".to_string(),
                business_description: "B2B marketing consultancy helping startups scale"
                    .to_string(),
                main_goal: "Build brand credibility".to_string(),
                target_audience: "Business decision-makers (35-55)".to_string(),
                not_working: strings(&[
                    "Looks outdated/unprofessional",
                    "Low conversions/poor CTAs",
                ]),
                is_working: strings(&[
                    "Good content",
                    "Clear value proposition",
                    "Fast performance",
                ]),
                desired_feeling: "Professional & trustworthy".to_string(),
                visual_style: "Classic & elegant".to_string(),
                current_platform: "WordPress".to_string(),
                inspiration_sites: "https://metalab.com".to_string(),
            },
            expected: BriefExpectation {
                must_include_sections: strings(&[
                    "Executive Summary",
                    "Strategic Recommendations",
                    "Technical Approach",
                ]),
                should_mention_keywords: strings(&[
                    "trust",
                    "credibility",
                    "B2B",
                    "case studies",
                    "testimonials",
                ]),
                should_have_colors: true,
                should_have_fonts: true,
                min_length: 500,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::prompts::build_redesign_prompt;

    #[test]
    fn test_five_cases_with_unique_names() {
        let cases = test_cases();
        assert_eq!(cases.len(), 5);
        let mut names: Vec<&str> = cases.iter().map(|c| c.name).collect();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_every_case_passes_required_field_checks() {
        for case in test_cases() {
            assert!(!case.input.business_description.is_empty(), "{}", case.name);
            assert!(!case.input.main_goal.is_empty(), "{}", case.name);
        }
    }

    #[test]
    fn test_minimal_case_triggers_placeholders() {
        let case = test_cases()
            .into_iter()
            .find(|c| c.name.starts_with("Minimal Input"))
            .unwrap();
        let prompt = build_redesign_prompt(&case.input);
        assert!(prompt.contains("Target audience: General audience"));
        assert!(prompt.contains("What's NOT working: Not specified"));
        assert!(prompt.contains("Current platform: Wix"));
    }
}
