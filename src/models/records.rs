use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// One employment period as returned by `/experiences/get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// The backend stores this as `Company_name`.
    #[serde(alias = "Company_name", default)]
    pub organization: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default)]
    pub start_date: Option<String>,
    /// A date or the literal `"Present"`.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub passion: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub degree: String,
    #[serde(alias = "field_of_study", default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Education {
    /// School name for the card title, falling back to the institution.
    pub fn title(&self) -> &str {
        self.school
            .as_deref()
            .or(self.institution.as_deref())
            .unwrap_or_default()
    }
}

/// The backend schema stores a list, older records carry a single string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Technologies {
    List(Vec<String>),
    Text(String),
}

impl Technologies {
    pub fn joined(&self) -> String {
        match self {
            Technologies::List(items) => items.join(", "),
            Technologies::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Option<Technologies>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_filename: String,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Base64 payload, optionally wrapped in a `data:` URI.
    #[serde(default)]
    pub image_data: Option<String>,
}

/// What can be said about a skill icon without drawing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillImage {
    pub mime: Option<String>,
    pub bytes: usize,
}

impl Skill {
    /// Decodes `image_data`. Payloads that are not valid base64 yield `None`.
    pub fn image(&self) -> Option<SkillImage> {
        let raw = self.image_data.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        let (mime, payload) = match raw.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest.split_once(',')?;
                let mime = header.strip_suffix(";base64").unwrap_or(header);
                (Some(mime.to_string()).filter(|m| !m.is_empty()), payload)
            }
            None => (self.content_type.clone(), raw),
        };

        match STANDARD.decode(payload) {
            Ok(bytes) => Some(SkillImage {
                mime,
                bytes: bytes.len(),
            }),
            Err(e) => {
                tracing::debug!(skill = %self.name, error = %e, "skill image is not valid base64");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
