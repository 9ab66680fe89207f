// Support ticket summarization pipeline.
// Flow: validate → build_summary_prompt → ModelInvoker → normalize_summary.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod summarizer;
