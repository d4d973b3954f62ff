use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::source::PortfolioSource;
use crate::config::ApiConfig;
use crate::errors::{FolioError, FolioResult};
use crate::models::{
    Certificate, ContactForm, ContactReceipt, Education, ExperienceRecord, Personal, Project, Skill,
};

pub const CONTACT_FALLBACK_ERROR: &str = "Failed to send message.";

/// A backend collection: its GET path and the noun used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub path: &'static str,
    pub label: &'static str,
}

pub const PERSONALS: Collection = Collection {
    path: "/personals/get",
    label: "personal",
};
pub const EDUCATIONS: Collection = Collection {
    path: "/educations/get",
    label: "education",
};
pub const EXPERIENCES: Collection = Collection {
    path: "/experiences/get",
    label: "experience",
};
pub const PROJECTS: Collection = Collection {
    path: "/projects/get",
    label: "projects",
};
pub const SKILLS: Collection = Collection {
    path: "/skills/get",
    label: "skills",
};
pub const CERTIFICATES: Collection = Collection {
    path: "/certificates/get",
    label: "certificates",
};
pub const CONTACT_PATH: &str = "/contact/post";

impl Collection {
    pub fn failure(&self) -> FolioError {
        FolioError::Fetch(format!("Failed to fetch {} info", self.label))
    }
}

pub struct HttpPortfolioSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPortfolioSource {
    pub fn new(config: &ApiConfig) -> FolioResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> FolioResult<Vec<T>> {
        let url = self.url(collection.path);
        tracing::debug!(url = %url, "fetching collection");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "request failed");
            collection.failure()
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "backend rejected request");
            return Err(collection.failure());
        }

        let items: Vec<T> = response.json().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "response body is not the expected JSON array");
            collection.failure()
        })?;
        tracing::info!(collection = collection.label, count = items.len(), "collection fetched");
        Ok(items)
    }
}

#[async_trait]
impl PortfolioSource for HttpPortfolioSource {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn personals(&self) -> FolioResult<Vec<Personal>> {
        self.get_collection(PERSONALS).await
    }

    async fn educations(&self) -> FolioResult<Vec<Education>> {
        self.get_collection(EDUCATIONS).await
    }

    async fn experiences(&self) -> FolioResult<Vec<ExperienceRecord>> {
        self.get_collection(EXPERIENCES).await
    }

    async fn projects(&self) -> FolioResult<Vec<Project>> {
        self.get_collection(PROJECTS).await
    }

    async fn skills(&self) -> FolioResult<Vec<Skill>> {
        self.get_collection(SKILLS).await
    }

    async fn certificates(&self) -> FolioResult<Vec<Certificate>> {
        self.get_collection(CERTIFICATES).await
    }

    async fn submit_contact(&self, form: &ContactForm) -> FolioResult<ContactReceipt> {
        let url = self.url(CONTACT_PATH);
        tracing::debug!(url = %url, email = %form.email, "submitting contact form");

        let response = self.client.post(&url).json(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = %status, "contact submission rejected");
            return Err(FolioError::Contact(contact_error_message(&body)));
        }

        let body = response.text().await?;
        let receipt = serde_json::from_str(&body).unwrap_or_default();
        tracing::info!("contact form delivered");
        Ok(receipt)
    }
}

/// Extracts `detail` from an error body, FastAPI style.
pub fn contact_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| detail_text(&v["detail"]))
        .unwrap_or_else(|| CONTACT_FALLBACK_ERROR.to_string())
}

/// Falsy details (null, empty, `false`, zero) count as missing.
fn detail_text(detail: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_used() {
        assert_eq!(
            contact_error_message(r#"{"detail":"Failed to send email"}"#),
            "Failed to send email"
        );
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(contact_error_message("<html>502</html>"), CONTACT_FALLBACK_ERROR);
        assert_eq!(contact_error_message(r#"{"error":"x"}"#), CONTACT_FALLBACK_ERROR);
        assert_eq!(contact_error_message(r#"{"detail":""}"#), CONTACT_FALLBACK_ERROR);
    }

    #[test]
    fn falsy_details_fall_back() {
        for body in [
            r#"{"detail":null}"#,
            r#"{"detail":"   "}"#,
            r#"{"detail":false}"#,
            r#"{"detail":0}"#,
        ] {
            assert_eq!(contact_error_message(body), CONTACT_FALLBACK_ERROR, "{body}");
        }
        assert_eq!(contact_error_message(r#"{"detail":true}"#), "true");
    }

    #[test]
    fn structured_detail_is_stringified() {
        let msg = contact_error_message(r#"{"detail":[{"loc":["body","email"]}]}"#);
        assert!(msg.contains("email"));
    }

    #[test]
    fn collection_failures_name_the_collection() {
        assert_eq!(EXPERIENCES.failure().to_string(), "Failed to fetch experience info");
        assert_eq!(PERSONALS.failure().to_string(), "Failed to fetch personal info");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let source = HttpPortfolioSource::new(&ApiConfig {
            base_url: "http://localhost:8000/".into(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(source.url(SKILLS.path), "http://localhost:8000/skills/get");
    }
}
