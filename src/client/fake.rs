// In-memory source for loader and contact tests.
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::http::{
    contact_error_message, Collection, CERTIFICATES, EDUCATIONS, EXPERIENCES, PERSONALS, PROJECTS,
    SKILLS,
};
use crate::client::source::PortfolioSource;
use crate::errors::{FolioError, FolioResult};
use crate::models::{
    Certificate, ContactForm, ContactReceipt, Education, ExperienceRecord, Personal, Project, Skill,
};

#[derive(Default)]
pub struct StaticSource {
    pub personals: Vec<Personal>,
    pub educations: Vec<Education>,
    pub experiences: Vec<ExperienceRecord>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    /// Collection whose fetch fails.
    pub failing: Option<Collection>,
    /// Error body returned by the contact endpoint, if it should fail.
    pub contact_error: Option<String>,
    pub submitted: Mutex<Vec<ContactForm>>,
}

impl StaticSource {
    fn serve<T: Clone>(&self, collection: Collection, items: &[T]) -> FolioResult<Vec<T>> {
        if self.failing == Some(collection) {
            return Err(collection.failure());
        }
        Ok(items.to_vec())
    }
}

#[async_trait]
impl PortfolioSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn personals(&self) -> FolioResult<Vec<Personal>> {
        self.serve(PERSONALS, &self.personals)
    }

    async fn educations(&self) -> FolioResult<Vec<Education>> {
        self.serve(EDUCATIONS, &self.educations)
    }

    async fn experiences(&self) -> FolioResult<Vec<ExperienceRecord>> {
        self.serve(EXPERIENCES, &self.experiences)
    }

    async fn projects(&self) -> FolioResult<Vec<Project>> {
        self.serve(PROJECTS, &self.projects)
    }

    async fn skills(&self) -> FolioResult<Vec<Skill>> {
        self.serve(SKILLS, &self.skills)
    }

    async fn certificates(&self) -> FolioResult<Vec<Certificate>> {
        self.serve(CERTIFICATES, &self.certificates)
    }

    async fn submit_contact(&self, form: &ContactForm) -> FolioResult<ContactReceipt> {
        if let Some(body) = &self.contact_error {
            return Err(FolioError::Contact(contact_error_message(body)));
        }
        self.submitted.lock().unwrap().push(form.clone());
        Ok(ContactReceipt::default())
    }
}
