use serde::Serialize;

use crate::client::PortfolioSource;
use crate::models::ContactForm;

pub const CONTACT_SENT_MESSAGE: &str = "Your message has been sent successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum ContactState {
    #[default]
    Idle,
    Submitting,
    Sent(String),
    Failed(String),
}

/// The contact form draft together with the outcome of its last submission.
#[derive(Debug, Default)]
pub struct ContactController {
    draft: ContactForm,
    state: ContactState,
}

impl ContactController {
    pub fn new(draft: ContactForm) -> Self {
        Self {
            draft,
            state: ContactState::Idle,
        }
    }

    pub fn draft(&self) -> &ContactForm {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactForm {
        &mut self.draft
    }

    pub fn state(&self) -> &ContactState {
        &self.state
    }

    /// Sends the draft. The draft is cleared only when the backend accepts it.
    pub async fn submit(&mut self, source: &dyn PortfolioSource) -> &ContactState {
        self.state = ContactState::Submitting;
        tracing::debug!(email = %self.draft.email, "contact submission started");

        self.state = match source.submit_contact(&self.draft).await {
            Ok(receipt) => {
                tracing::info!(backend_message = %receipt.message, "contact form sent");
                self.draft.clear();
                ContactState::Sent(CONTACT_SENT_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "contact form failed");
                ContactState::Failed(e.to_string())
            }
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::StaticSource;

    fn draft() -> ContactForm {
        ContactForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            message: "Hello!".into(),
        }
    }

    #[tokio::test]
    async fn success_clears_draft() {
        let source = StaticSource::default();
        let mut ctl = ContactController::new(draft());

        let state = ctl.submit(&source).await.clone();
        assert_eq!(state, ContactState::Sent(CONTACT_SENT_MESSAGE.into()));
        assert!(ctl.draft().is_empty());
        assert_eq!(source.submitted.lock().unwrap().as_slice(), &[draft()]);
    }

    #[tokio::test]
    async fn failure_keeps_draft_and_reports_detail() {
        let source = StaticSource {
            contact_error: Some(r#"{"detail":"Failed to send email"}"#.into()),
            ..Default::default()
        };
        let mut ctl = ContactController::new(draft());

        let state = ctl.submit(&source).await.clone();
        assert_eq!(state, ContactState::Failed("Failed to send email".into()));
        assert_eq!(ctl.draft(), &draft());
    }

    #[tokio::test]
    async fn resubmission_replaces_previous_outcome() {
        let failing = StaticSource {
            contact_error: Some("oops".into()),
            ..Default::default()
        };
        let mut ctl = ContactController::new(draft());
        ctl.submit(&failing).await;
        assert_eq!(ctl.state(), &ContactState::Failed("Failed to send message.".into()));

        ctl.draft_mut().message = "Second try".into();
        ctl.submit(&StaticSource::default()).await;
        assert!(matches!(ctl.state(), ContactState::Sent(_)));
    }
}
