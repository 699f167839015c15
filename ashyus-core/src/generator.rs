//! Generates synopses and a sample first chapter for a new book from its title.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::remote::MaybeSendSync;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Text fields a generator fills in
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDetails {
    pub short_synopsis: String,
    pub full_synopsis: String,
    pub first_chapter_markdown: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generator returned status {0}")]
    Status(u16),
    #[error("generator returned an empty response")]
    Empty,
    #[error("generator returned invalid details: {0}")]
    Invalid(String),
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BookDetailsGenerator: MaybeSendSync {
    async fn generate(&self, title: &str) -> Result<GeneratedDetails, GeneratorError>;
}

/// Google Gemini client over the public REST API
pub struct GeminiGenerator {
    api_key: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT,
            GEMINI_MODEL,
            urlencoding::encode(&self.api_key)
        )
    }
}

fn prompt_for(title: &str) -> String {
    format!(
        "Para o livro com o título '{title}', crie um conteúdo para um site de autor. \
         O estilo deve ser dark fantasy elegante. Forneça sua resposta como um objeto JSON \
         VÁLIDO e nada mais, sem formatação extra ou markdown. O objeto JSON deve ter as \
         seguintes chaves: \"fullSynopsis\" (uma sinopse completa e envolvente com cerca de \
         3-4 parágrafos), \"shortSynopsis\" (uma sinopse curta e impactante de no máximo 3 \
         linhas), e \"firstChapterMarkdown\" (o primeiro capítulo fictício do livro, escrito \
         em markdown, com cerca de 500 palavras, contendo parágrafos e diálogos)."
    )
}

fn request_body(title: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt_for(title) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "fullSynopsis": { "type": "STRING" },
                    "shortSynopsis": { "type": "STRING" },
                    "firstChapterMarkdown": { "type": "STRING" }
                },
                "required": ["fullSynopsis", "shortSynopsis", "firstChapterMarkdown"]
            }
        }
    })
}

/// Pull the details object out of the first candidate's text.
fn parse_details(response: GenerateResponse) -> Result<GeneratedDetails, GeneratorError> {
    let text = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(GeneratorError::Empty)?;

    serde_json::from_str(&text).map_err(|e| GeneratorError::Invalid(e.to_string()))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BookDetailsGenerator for GeminiGenerator {
    async fn generate(&self, title: &str) -> Result<GeneratedDetails, GeneratorError> {
        info!("Generating details for '{}'", title);
        let resp = self
            .http
            .post(self.url())
            .json(&request_body(title))
            .send()
            .await?;

        if !resp.status().is_success() {
            error!("Generator request failed: {}", resp.status());
            return Err(GeneratorError::Status(resp.status().as_u16()));
        }

        let body: GenerateResponse = resp.json().await?;
        parse_details(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(text: &str) -> GenerateResponse {
        serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    #[test]
    fn parses_details_from_first_candidate() {
        let details = parse_details(response_with(
            r###" {"shortSynopsis":"s","fullSynopsis":"f","firstChapterMarkdown":"## 1"} "###,
        ))
        .unwrap();
        assert_eq!(details.short_synopsis, "s");
        assert_eq!(details.first_chapter_markdown, "## 1");
    }

    #[test]
    fn empty_response_is_an_error() {
        let empty: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(parse_details(empty), Err(GeneratorError::Empty)));
        assert!(matches!(
            parse_details(response_with("   ")),
            Err(GeneratorError::Empty)
        ));
    }

    #[test]
    fn non_json_text_is_invalid() {
        assert!(matches!(
            parse_details(response_with("Era uma vez")),
            Err(GeneratorError::Invalid(_))
        ));
    }

    #[test]
    fn request_asks_for_json_with_schema() {
        let body = request_body("Runa");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("'Runa'"));
    }
}
