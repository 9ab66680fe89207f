// Website redesign brief pipeline.
// Flow: validate → build_redesign_prompt → ModelInvoker → trim.
// The brief is returned as raw Markdown; no normalization is applied.

pub mod generator;
pub mod handlers;
pub mod prompts;
