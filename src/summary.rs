//! Natural-language summary of an extracted record
//!
//! Sends the record embedded in a fixed prompt to the OpenAI chat-completions
//! API and returns the short summary text. There is no retry or fallback; any
//! transport or API failure surfaces as a fatal error with its cause.

use crate::config::SummaryConfig;
use crate::error::{Error, Result};
use crate::record::ExtractedRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_SUMMARY_TOKENS: u32 = 300;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Render the fixed prompt template with the record's values.
pub fn build_prompt(record: &ExtractedRecord) -> String {
    format!(
        "Write a short summary, 2 to 5 lines of plain text, of this auditor \
         appointment disclosed in an Indian MCA Form ADT-1 filing. Mention the \
         company, the auditor, and when and how they were appointed. Do not \
         use bullet points or headings.\n\n\
         Company name: {}\n\
         CIN: {}\n\
         Registered office: {}\n\
         Auditor: {}\n\
         Auditor address: {}\n\
         Membership / firm registration number: {}\n\
         Date of appointment: {}\n\
         Nature of appointment: {}\n",
        record.company_name,
        record.cin,
        record.registered_office,
        record.auditor_name,
        record.auditor_address,
        record.auditor_frn_or_membership,
        record.appointment_date,
        record.appointment_type,
    )
}

/// Client for the summarization call.
pub struct Summarizer {
    client: reqwest::Client,
    model: String,
    api_key: String,
}

impl Summarizer {
    pub fn new(config: &SummaryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::HttpRequest)?;

        Ok(Self {
            client,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Produce the summary text for one record.
    pub async fn summarize(&self, record: &ExtractedRecord) -> Result<String> {
        let prompt = build_prompt(record);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.2,
            max_tokens: MAX_SUMMARY_TOKENS,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Summarization {
                reason: format!("API returned {}: {}", status, body),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::Summarization {
                reason: "response contained no completion".to_string(),
            })?;

        Ok(content)
    }
}
