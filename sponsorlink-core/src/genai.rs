//! Generative-model client
//!
//! Thin wrapper over the Gemini `generateContent` endpoint. Two uses:
//! - listing copy: a topic prompt is expanded into a `{title, description}`
//!   pair that the model returns as JSON, sometimes wrapped in a fenced
//!   code block which must be stripped before parsing
//! - contract text: structured terms are expanded into long-form contract
//!   prose returned verbatim
//!
//! Failures are surfaced to the caller; there is no retry or repair.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Outbound calls are bounded; a hung upstream must not hold requests open.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("GEMINI_API_KEY is empty")]
    MissingKey,

    #[error("generative model request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("generative model returned no candidates")]
    EmptyResponse,

    #[error("generative model response was not parseable: {reason}")]
    Format { reason: String },
}

/// Parsed title/description pair for a brand listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingCopy {
    pub title: String,
    pub description: String,
}

/// Terms embedded into the contract prompt. All fields required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    pub brand_name: String,
    pub influencer_name: String,
    pub campaign_details: String,
    pub compensation: String,
    pub duration: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, GenAiError> {
        if api_key.trim().is_empty() {
            return Err(GenAiError::MissingKey);
        }
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, api_key })
    }

    /// Generate a title/description pair for a sponsorship listing.
    pub async fn generate_listing_copy(&self, topic: &str) -> Result<ListingCopy, GenAiError> {
        let text = self.generate(&listing_prompt(topic)).await?;
        parse_listing_copy(&text)
    }

    /// Generate long-form contract text. Returned verbatim; the legal
    /// content is not validated here.
    pub async fn generate_contract(&self, terms: &ContractTerms) -> Result<String, GenAiError> {
        self.generate(&contract_prompt(terms)).await
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        #[derive(Serialize)]
        struct GenerateRequest<'a> {
            contents: Vec<Content<'a>>,
        }

        #[derive(Serialize)]
        struct Content<'a> {
            parts: Vec<Part<'a>>,
        }

        #[derive(Serialize)]
        struct Part<'a> {
            text: &'a str,
        }

        #[derive(Deserialize)]
        struct GenerateResponse {
            #[serde(default)]
            candidates: Vec<Candidate>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: CandidateContent,
        }

        #[derive(Deserialize)]
        struct CandidateContent {
            #[serde(default)]
            parts: Vec<TextPart>,
        }

        #[derive(Deserialize)]
        struct TextPart {
            #[serde(default)]
            text: String,
        }

        let response = self
            .http
            .post(GENERATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest {
                contents: vec![Content {
                    parts: vec![Part { text: prompt }],
                }],
            })
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or(GenAiError::EmptyResponse)?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(GenAiError::EmptyResponse);
        }

        Ok(text)
    }
}

fn listing_prompt(topic: &str) -> String {
    format!(
        "Generate a sponsorship listing for the following topic: {topic}\n\
         Respond with only a JSON object containing exactly two string \
         fields, \"title\" (a short catchy headline) and \"description\" \
         (two to three sentences pitching the deal to influencers). \
         Do not include any other text."
    )
}

fn contract_prompt(terms: &ContractTerms) -> String {
    format!(
        "Draft a sponsorship agreement between the brand \"{brand}\" and the \
         influencer \"{influencer}\".\n\
         Campaign details: {details}\n\
         Compensation: {compensation}\n\
         Duration: {duration}\n\
         Format the agreement as structured plain text with numbered \
         sections covering scope of work, content approval, payment terms, \
         confidentiality, and termination.",
        brand = terms.brand_name,
        influencer = terms.influencer_name,
        details = terms.campaign_details,
        compensation = terms.compensation,
        duration = terms.duration,
    )
}

/// Strip a Markdown code fence wrapper if the model added one.
///
/// Handles ```json ... ``` and bare ``` ... ``` fences; anything else is
/// returned trimmed but otherwise untouched.
pub fn strip_code_fence(raw: &str) -> String {
    let fence = Regex::new(r"(?s)^\s*```(?:[A-Za-z0-9_-]+)?\s*\n?(.*?)\n?\s*```\s*$")
        .expect("fence regex is valid");

    match fence.captures(raw) {
        Some(caps) => caps[1].trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Parse the model's raw text into a [`ListingCopy`].
///
/// The text may be fenced; after stripping it must be a JSON object with
/// both `title` and `description`. Partial data is never returned.
pub fn parse_listing_copy(raw: &str) -> Result<ListingCopy, GenAiError> {
    let payload = strip_code_fence(raw);

    let copy: ListingCopy =
        serde_json::from_str(&payload).map_err(|err| GenAiError::Format {
            reason: err.to_string(),
        })?;

    if copy.title.trim().is_empty() || copy.description.trim().is_empty() {
        return Err(GenAiError::Format {
            reason: "title and description must be non-empty".to_string(),
        });
    }

    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let raw = "```json\n{\"title\":\"T\",\"description\":\"D\"}\n```";
        assert_eq!(strip_code_fence(raw), "{\"title\":\"T\",\"description\":\"D\"}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fence(raw), "{\"a\":1}");
    }

    #[test]
    fn unfenced_text_is_trimmed_only() {
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn parses_fenced_listing_copy() {
        let raw = "```json\n{\"title\":\"T\",\"description\":\"D\"}\n```";
        let copy = parse_listing_copy(raw).unwrap();
        assert_eq!(
            copy,
            ListingCopy {
                title: "T".to_string(),
                description: "D".to_string(),
            }
        );
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let raw = "```json\n{\"title\":\"T\",\n```";
        let err = parse_listing_copy(raw).unwrap_err();
        assert!(matches!(err, GenAiError::Format { .. }));
    }

    #[test]
    fn missing_field_is_a_format_error() {
        let err = parse_listing_copy("{\"title\":\"T\"}").unwrap_err();
        assert!(matches!(err, GenAiError::Format { .. }));
    }

    #[test]
    fn empty_fields_are_a_format_error() {
        let err = parse_listing_copy("{\"title\":\"\",\"description\":\"D\"}").unwrap_err();
        assert!(matches!(err, GenAiError::Format { .. }));
    }

    #[test]
    fn empty_api_key_rejected() {
        assert!(matches!(
            GeminiClient::new("  ".to_string()),
            Err(GenAiError::MissingKey)
        ));
    }

    #[test]
    fn prompts_embed_inputs() {
        assert!(listing_prompt("vegan snacks").contains("vegan snacks"));

        let terms = ContractTerms {
            brand_name: "Nike".into(),
            influencer_name: "Ada".into(),
            campaign_details: "3 reels".into(),
            compensation: "$5k".into(),
            duration: "6 weeks".into(),
        };
        let prompt = contract_prompt(&terms);
        for needle in ["Nike", "Ada", "3 reels", "$5k", "6 weeks"] {
            assert!(prompt.contains(needle), "missing {needle}");
        }
    }
}
