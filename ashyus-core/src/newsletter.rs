use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";
const SUBJECT: &str = "Nova inscrição - Ashyus Books";
const FROM_NAME: &str = "Ashyus Books Site";

#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("subscription rejected: {0}")]
    Rejected(String),
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    access_key: &'a str,
    email: &'a str,
    subject: &'a str,
    from_name: &'a str,
}

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Footer newsletter sign-up, delivered through a form-to-email service.
///
/// Without an access key sign-ups are accepted and dropped, so the form still
/// works in development.
#[derive(Clone)]
pub struct NewsletterClient {
    access_key: Option<String>,
    http: reqwest::Client,
}

impl NewsletterClient {
    pub fn new(access_key: Option<String>) -> Self {
        Self {
            access_key,
            http: reqwest::Client::new(),
        }
    }

    pub async fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
        let email = email.trim();
        if !looks_like_email(email) {
            return Err(NewsletterError::InvalidEmail);
        }

        let Some(access_key) = self.access_key.as_deref() else {
            warn!("Newsletter access key not set, sign-up not delivered");
            return Ok(());
        };

        let resp = self
            .http
            .post(WEB3FORMS_ENDPOINT)
            .header("Accept", "application/json")
            .json(&SubmitRequest {
                access_key,
                email,
                subject: SUBJECT,
                from_name: FROM_NAME,
            })
            .send()
            .await?;

        let body: SubmitResponse = resp.json().await?;
        if body.success {
            info!("Newsletter sign-up delivered");
            Ok(())
        } else {
            Err(NewsletterError::Rejected(
                body.message.unwrap_or_else(|| "unknown reason".to_string()),
            ))
        }
    }
}

/// Minimal shape check: one `@` with text on both sides and a dot in the domain.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("leitor@exemplo.com.br"));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("leitor"));
        assert!(!looks_like_email("@exemplo.com"));
        assert!(!looks_like_email("leitor@exemplo"));
        assert!(!looks_like_email("a b@exemplo.com"));
        assert!(!looks_like_email("a@b@exemplo.com"));
    }

    #[tokio::test]
    async fn without_key_valid_emails_are_accepted() {
        let client = NewsletterClient::new(None);
        assert!(client.subscribe(" leitor@exemplo.com ").await.is_ok());
        assert!(matches!(
            client.subscribe("nope").await,
            Err(NewsletterError::InvalidEmail)
        ));
    }
}
