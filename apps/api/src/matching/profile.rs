//! Typed views of the user and job records the engine scores.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::skills::{extract_skills, SkillSet};
use crate::matching::vocabulary::SkillVocabulary;
use crate::models::job::JobRow;
use crate::models::user::UserRow;

/// A user's resume text plus the skills derived from it. The skill set is
/// only ever built from the text, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    user_id: Uuid,
    resume_text: Option<String>,
    skills: SkillSet,
}

impl ResumeProfile {
    /// Empty text is stored as absent.
    pub fn new(user_id: Uuid, resume_text: Option<String>, vocabulary: &SkillVocabulary) -> Self {
        let resume_text = resume_text.filter(|t| !t.is_empty());
        let skills = extract_skills(resume_text.as_deref(), vocabulary);
        Self {
            user_id,
            resume_text,
            skills,
        }
    }

    pub fn from_row(row: UserRow, vocabulary: &SkillVocabulary) -> Self {
        Self::new(row.id, row.resume_text, vocabulary)
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume_text.as_deref()
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }
}

/// A job's description and its required service tags, in authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    job_id: Uuid,
    description: Option<String>,
    required_services: Vec<String>,
}

impl JobRequirement {
    pub fn new(job_id: Uuid, description: Option<String>, required_services: Vec<String>) -> Self {
        Self {
            job_id,
            description: description.filter(|d| !d.is_empty()),
            required_services,
        }
    }

    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn required_services(&self) -> &[String] {
        &self.required_services
    }
}

impl From<JobRow> for JobRequirement {
    fn from(row: JobRow) -> Self {
        Self::new(row.id, row.description, row.aws_services)
    }
}
