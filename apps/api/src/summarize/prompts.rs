// Prompt constants for the ticket summarization pipeline.

use crate::summarize::summarizer::TicketRequest;

/// System prompt for ticket summarization.
pub const SUMMARY_SYSTEM: &str = "You are a helpful customer support assistant. \
    Summarize support tickets concisely, highlighting the main issue and any action items.";

/// Ticket prompt template. Placeholders are replaced field-for-field;
/// ticket fields appear verbatim in the output.
const SUMMARY_PROMPT_TEMPLATE: &str = r#"
Title: {title}
Customer: {customer_email}
Description: {description}

Please provide:
1. A brief summary (1-2 sentences)
2. Priority level (low/medium/high)
3. Suggested action for the support team

Format your response as JSON.
"#;

/// Builds the user message for a ticket. Pure and deterministic.
pub fn build_summary_prompt(ticket: &TicketRequest) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{title}", &ticket.title)
        .replace("{customer_email}", &ticket.customer_email)
        .replace("{description}", &ticket.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticket() -> TicketRequest {
        TicketRequest {
            title: "Cannot log in".to_string(),
            description: "Password reset emails never arrive.".to_string(),
            customer_email: "jo@example.com".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_all_fields_verbatim() {
        let prompt = build_summary_prompt(&make_ticket());
        assert!(prompt.contains("Cannot log in"));
        assert!(prompt.contains("jo@example.com"));
        assert!(prompt.contains("Password reset emails never arrive."));
    }

    #[test]
    fn test_prompt_labels_each_field() {
        let prompt = build_summary_prompt(&make_ticket());
        assert!(prompt.contains("Title: Cannot log in"));
        assert!(prompt.contains("Customer: jo@example.com"));
        assert!(prompt.contains("Description: Password reset emails never arrive."));
    }

    #[test]
    fn test_prompt_requests_json_output() {
        let prompt = build_summary_prompt(&make_ticket());
        assert!(prompt.contains("Format your response as JSON."));
        assert!(prompt.contains("Priority level (low/medium/high)"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let ticket = make_ticket();
        assert_eq!(build_summary_prompt(&ticket), build_summary_prompt(&ticket));
    }
}
