use serde::{Deserialize, Serialize};

/// Body of `POST /contact/post`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Success body returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    #[serde(default = "default_receipt_message")]
    pub message: String,
}

fn default_receipt_message() -> String {
    "Email sent successfully".to_string()
}

impl Default for ContactReceipt {
    fn default() -> Self {
        Self {
            message: default_receipt_message(),
        }
    }
}
