use async_trait::async_trait;

use crate::errors::FolioResult;
use crate::models::{
    Certificate, ContactForm, ContactReceipt, Education, ExperienceRecord, Personal, Project, Skill,
};

/// Where the About page gets its records from.
/// The HTTP backend is the only production implementation.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    async fn personals(&self) -> FolioResult<Vec<Personal>>;

    async fn educations(&self) -> FolioResult<Vec<Education>>;

    async fn experiences(&self) -> FolioResult<Vec<ExperienceRecord>>;

    async fn projects(&self) -> FolioResult<Vec<Project>>;

    async fn skills(&self) -> FolioResult<Vec<Skill>>;

    async fn certificates(&self) -> FolioResult<Vec<Certificate>>;

    async fn submit_contact(&self, form: &ContactForm) -> FolioResult<ContactReceipt>;
}
