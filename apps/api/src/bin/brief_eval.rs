//! brief-eval — scores redesign briefs produced by a running Briefdesk server.
//!
//! Posts each fixture case to the brief endpoint, runs all seven scorers on
//! the Markdown that comes back, and prints a per-case report plus averages.
//! Cases run one at a time to stay under upstream rate limits.
//!
//! Usage: `BRIEF_EVAL_URL=http://localhost:3001/api/brief brief-eval`

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use briefdesk_api::scoring::fixtures::{test_cases, EvalCase};
use briefdesk_api::scoring::scorers::score_brief;

const DEFAULT_URL: &str = "http://localhost:3001/api/brief";

#[derive(Debug, Deserialize)]
struct BriefReply {
    success: bool,
    #[serde(default)]
    brief: String,
    #[serde(default)]
    error: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let url = std::env::var("BRIEF_EVAL_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let client = reqwest::Client::new();
    let cases = test_cases();

    info!("Scoring {} cases against {url}", cases.len());

    let mut case_averages = Vec::new();

    for case in &cases {
        let brief = generate_brief(&client, &url, case).await?;
        let scores = score_brief(&brief, &case.expected);

        println!("\n{}", case.name);
        println!("{}", "-".repeat(case.name.len()));
        let mut total = 0.0;
        for score in &scores {
            println!("  {:<22} {:.2}", score.name, score.score);
            total += score.score;
        }
        let average = total / scores.len() as f64;
        println!("  {:<22} {average:.2}", "Average");
        case_averages.push(average);
    }

    let overall = case_averages.iter().sum::<f64>() / case_averages.len() as f64;
    println!("\nOverall average across {} cases: {overall:.2}", case_averages.len());

    Ok(())
}

async fn generate_brief(client: &reqwest::Client, url: &str, case: &EvalCase) -> Result<String> {
    let response = client
        .post(url)
        .json(&case.input)
        .send()
        .await
        .with_context(|| format!("request failed for case '{}'", case.name))?;

    let status = response.status();
    let reply: BriefReply = response
        .json()
        .await
        .with_context(|| format!("malformed reply for case '{}'", case.name))?;

    if !status.is_success() || !reply.success {
        bail!("case '{}' failed ({status}): {}", case.name, reply.error);
    }

    Ok(reply.brief)
}
