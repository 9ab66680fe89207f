//! Briefdesk — a thin HTTP proxy in front of the Anthropic Messages API.
//!
//! Two pipelines share one shape: build a prompt from form fields, make a
//! single model call, turn the reply into a typed result.
//!
//! - `summarize`: support tickets in, `{summary, priority, suggestedAction}` out.
//! - `brief`: redesign questionnaire in, a Markdown brief out, verbatim.
//!
//! The `scoring` module grades generated briefs and backs the `brief-eval`
//! binary; the server never calls it.

pub mod brief;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod summarize;
