pub mod contact;
pub mod records;

pub use contact::{ContactForm, ContactReceipt};
pub use records::{
    Certificate, Education, ExperienceRecord, Personal, Project, Skill, SkillImage, Technologies,
};
