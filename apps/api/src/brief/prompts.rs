// Prompt template for the redesign brief. The persona preamble lives inside
// the user message itself, so these calls send no system prompt.

use crate::brief::generator::RedesignInput;

/// Placeholder text substituted for empty optional fields. Each optional
/// field has a named default so the model always sees a complete form.
const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";
const GENERAL_AUDIENCE: &str = "General audience";
const PROFESSIONAL: &str = "Professional";
const MODERN: &str = "Modern";
const UNKNOWN: &str = "Unknown";

const REDESIGN_PROMPT_TEMPLATE: &str = r#"You are an expert UX/UI designer and website strategist. A user wants to redesign their website and has provided the following information:

BUSINESS CONTEXT:
- Website URL: {website_url}
- Business description: {business_description}
- Main redesign goal: {main_goal}

AUDIENCE & CURRENT STATE:
- Target audience: {target_audience}
- What's NOT working: {not_working}
- What IS working: {is_working}

DESIGN DIRECTION:
- Desired feeling: {desired_feeling}
- Visual style: {visual_style}

TECHNICAL:
- Current platform: {current_platform}
- Inspiration websites: {inspiration_sites}

YOUR TASK:
Generate a comprehensive, actionable website redesign brief that they can use with any designer, developer, or AI tool.

The brief should include:

1. **Executive Summary** - One compelling paragraph capturing the essence of the redesign
2. **Strategic Recommendations** - 3-5 key UX/UI improvements based on their goals
3. **Visual Design Direction** - Specific color palette (with hex codes), typography suggestions, and layout ideas
4. **Content & Messaging Strategy** - How to better communicate their value proposition
5. **Technical Approach** - Platform recommendations and implementation considerations
6. **Priority Roadmap** - Break down into: Quick wins (1-2 weeks), Medium-term (1-2 months), Long-term vision
7. **Ready-to-Use Implementation Prompt** - A detailed, copy-paste ready prompt they can give to ChatGPT, Claude, or a human designer

Format your entire response in clean Markdown with proper headers, bullet points, and emphasis. Be specific, actionable, and tailored to their exact answers. Make it professional enough to share with stakeholders."#;

/// Builds the brief prompt. Pure and deterministic: empty optional fields
/// render as their placeholder, list fields join with ", ".
pub fn build_redesign_prompt(input: &RedesignInput) -> String {
    REDESIGN_PROMPT_TEMPLATE
        .replace("{website_url}", or_placeholder(&input.website_url, NOT_PROVIDED))
        .replace("{business_description}", &input.business_description)
        .replace("{main_goal}", &input.main_goal)
        .replace(
            "{target_audience}",
            or_placeholder(&input.target_audience, GENERAL_AUDIENCE),
        )
        .replace("{not_working}", &join_or_placeholder(&input.not_working))
        .replace("{is_working}", &join_or_placeholder(&input.is_working))
        .replace(
            "{desired_feeling}",
            or_placeholder(&input.desired_feeling, PROFESSIONAL),
        )
        .replace("{visual_style}", or_placeholder(&input.visual_style, MODERN))
        .replace(
            "{current_platform}",
            or_placeholder(&input.current_platform, UNKNOWN),
        )
        .replace(
            "{inspiration_sites}",
            or_placeholder(&input.inspiration_sites, NOT_PROVIDED),
        )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn join_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        items.join(", ")
    }
}
