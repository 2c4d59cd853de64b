//! Form models of the inline admin forms and the public contact form.
//!
//! Each form holds the raw text of its inputs and turns it into a request
//! payload, running the required-field checks first.

use crate::types::{
    EntityId, NewContact, NewExperience, NewProject, NewSkill, NewSkillCategory, Project,
    ProjectChanges,
};
use crate::validation::{ValidationError, optional, parse_tags, require, validate_email};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_url: String,
    pub github_url: String,
    /// Comma-separated.
    pub tags: String,
}

impl ProjectForm {
    /// Pre-filled from an existing project, for the edit dialog.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            tags: project.tag_list().join(", "),
        }
    }

    /// Payload for a new project appended at `order_index`.
    pub fn to_new_project(&self, order_index: usize) -> Result<NewProject, ValidationError> {
        Ok(NewProject {
            title: require("Title", &self.title)?,
            description: require("Description", &self.description)?,
            image: optional(&self.image),
            tags: parse_tags(&self.tags),
            live_url: optional(&self.live_url),
            github_url: optional(&self.github_url),
            featured: "true".to_owned(),
            order_index,
        })
    }

    /// Partial update for the edit dialog. Blank optional inputs are left out
    /// of the request so the stored value is kept.
    pub fn to_changes(&self) -> Result<ProjectChanges, ValidationError> {
        Ok(ProjectChanges {
            title: Some(require("Title", &self.title)?),
            description: Some(require("Description", &self.description)?),
            image: optional(&self.image),
            tags: Some(parse_tags(&self.tags)),
            live_url: optional(&self.live_url),
            github_url: optional(&self.github_url),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceForm {
    pub role: String,
    pub company: String,
    /// Free text, e.g. "2023 - Present".
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub tags: String,
}

impl ExperienceForm {
    pub fn to_new_experience(&self, order_index: usize) -> Result<NewExperience, ValidationError> {
        Ok(NewExperience {
            role: require("Role", &self.role)?,
            company: require("Company", &self.company)?,
            period: require("Period", &self.period)?,
            start_date: optional(&self.start_date),
            end_date: optional(&self.end_date),
            description: require("Description", &self.description)?,
            tags: parse_tags(&self.tags),
            order_index,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn to_new_contact(&self) -> Result<NewContact, ValidationError> {
        Ok(NewContact {
            name: require("Name", &self.name)?,
            email: validate_email(&self.email)?,
            message: require("Message", &self.message)?,
        })
    }
}

pub fn new_category(name: &str, order_index: usize) -> Result<NewSkillCategory, ValidationError> {
    Ok(NewSkillCategory {
        name: require("Category name", name)?,
        order_index,
    })
}

pub fn new_skill(
    name: &str,
    category_id: EntityId,
    order_index: usize,
) -> Result<NewSkill, ValidationError> {
    Ok(NewSkill {
        name: require("Skill name", name)?,
        category_id,
        order_index,
    })
}
