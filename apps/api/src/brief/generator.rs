//! Redesign brief generator — one prompt, one model call, Markdown out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::brief::prompts::build_redesign_prompt;
use crate::llm_client::{LlmError, ModelInvoker, BRIEF_MAX_TOKENS};

/// The ten questionnaire answers. Only `businessDescription` and `mainGoal`
/// are required; every other field has a named placeholder substituted at
/// prompt-build time when left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedesignInput {
    pub website_url: String,
    pub business_description: String,
    pub main_goal: String,
    pub target_audience: String,
    pub not_working: Vec<String>,
    pub is_working: Vec<String>,
    pub desired_feeling: String,
    pub visual_style: String,
    pub current_platform: String,
    pub inspiration_sites: String,
}

/// Generates a Markdown redesign brief for the questionnaire answers.
///
/// The brief prompt carries its own persona preamble, so no separate system
/// instruction is sent. The reply's first text block is trimmed and returned
/// verbatim — downstream consumers may parse the Markdown headings, this
/// service does not.
pub async fn generate_brief(
    invoker: &dyn ModelInvoker,
    input: &RedesignInput,
) -> Result<String, LlmError> {
    let prompt = build_redesign_prompt(input);
    let response = invoker.invoke(&prompt, None, BRIEF_MAX_TOKENS).await?;

    let brief = response.text().unwrap_or("").trim().to_string();
    debug!("Brief generated ({} chars)", brief.len());

    Ok(brief)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{ContentBlock, LlmResponse};
    use async_trait::async_trait;

    struct CannedInvoker {
        reply: String,
    }

    #[async_trait]
    impl ModelInvoker for CannedInvoker {
        async fn invoke(
            &self,
            _prompt: &str,
            system: Option<&str>,
            max_tokens: u32,
        ) -> Result<LlmResponse, LlmError> {
            assert!(system.is_none(), "brief calls carry no system prompt");
            assert_eq!(max_tokens, BRIEF_MAX_TOKENS);
            Ok(LlmResponse {
                content: vec![ContentBlock {
                    block_type: "text".to_string(),
                    text: Some(self.reply.clone()),
                }],
                usage: None,
            })
        }
    }

    fn minimal_input() -> RedesignInput {
        RedesignInput {
            business_description: "New Italian restaurant in downtown".to_string(),
            main_goal: "Modernize outdated appearance".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_brief_is_trimmed_but_otherwise_verbatim() {
        let invoker = CannedInvoker {
            reply: "\n\n# Executive Summary\n\nSome **bold** direction.\n\n".to_string(),
        };
        let brief = generate_brief(&invoker, &minimal_input()).await.unwrap();
        assert_eq!(brief, "# Executive Summary\n\nSome **bold** direction.");
    }

    #[tokio::test]
    async fn test_missing_text_block_yields_empty_brief() {
        let invoker = CannedInvoker {
            reply: String::new(),
        };
        let brief = generate_brief(&invoker, &minimal_input()).await.unwrap();
        assert_eq!(brief, "");
    }

    #[test]
    fn test_input_deserializes_from_camel_case() {
        let input: RedesignInput = serde_json::from_str(
            r#"{
                "businessDescription": "Sell handmade jewelry online",
                "mainGoal": "Increase sales/conversions",
                "notWorking": ["Not mobile-friendly"],
                "currentPlatform": "Shopify"
            }"#,
        )
        .unwrap();
        assert_eq!(input.business_description, "Sell handmade jewelry online");
        assert_eq!(input.not_working, vec!["Not mobile-friendly".to_string()]);
        assert_eq!(input.current_platform, "Shopify");
        // Unset fields default to empty
        assert_eq!(input.website_url, "");
        assert!(input.is_working.is_empty());
    }
}
