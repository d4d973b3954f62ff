use chrono::Datelike;
use serde::Serialize;

use crate::models::{Certificate, Education, ExperienceRecord, Personal, Project, Skill, SkillImage};
use crate::timeline::{parse_record_date, DurationFormatter, DurationLabels};

/// Everything the About page shows, already ordered and labelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AboutPage {
    pub personal: Option<Personal>,
    pub educations: Vec<EducationView>,
    pub experiences: Vec<ExperienceView>,
    pub projects: Vec<ProjectView>,
    pub skills: Vec<SkillView>,
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    #[serde(flatten)]
    pub record: ExperienceRecord,
    pub duration: DurationLabels,
}

impl ExperienceView {
    pub fn new(record: ExperienceRecord, formatter: &DurationFormatter) -> Self {
        let duration = formatter.labels(&record);
        Self { record, duration }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    #[serde(flatten)]
    pub record: Education,
    /// `"2019 - 2023"`, either side dropped when unknown.
    pub years: String,
}

impl From<Education> for EducationView {
    fn from(record: Education) -> Self {
        let years = year_range(record.start_date.as_deref(), record.end_date.as_deref());
        Self { record, years }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub record: Project,
    pub tech_stack: String,
}

impl From<Project> for ProjectView {
    fn from(record: Project) -> Self {
        let tech_stack = record
            .technologies
            .as_ref()
            .map(|t| t.joined())
            .unwrap_or_default();
        Self { record, tech_stack }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: Option<String>,
    pub name: String,
    pub image: Option<SkillImage>,
}

impl From<Skill> for SkillView {
    fn from(skill: Skill) -> Self {
        let image = skill.image();
        Self {
            id: skill.id,
            name: skill.name,
            image,
        }
    }
}

fn year_range(start: Option<&str>, end: Option<&str>) -> String {
    let year = |v: Option<&str>| v.and_then(parse_record_date).map(|d| d.year());
    match (year(start), year(end)) {
        (Some(s), Some(e)) => format!("{s} - {e}"),
        (Some(s), None) => s.to_string(),
        (None, Some(e)) => e.to_string(),
        (None, None) => String::new(),
    }
}
