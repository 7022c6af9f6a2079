//! Project Entity
//!
//! A tracked project. Only the status changes after creation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseProjectIdError;

/// Project identifier, assigned from a per-store counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = ParseProjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ProjectId)
            .map_err(|_| ParseProjectIdError(s.to_string()))
    }
}

/// Which list a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    /// List heading shown above the projects with this status
    pub fn heading(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE PROJECTS",
            ProjectStatus::Finished => "FINISHED PROJECTS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new active project
    pub fn new(id: ProjectId, title: String, description: String, people: u32) -> Self {
        Self {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    /// "1 person" or "N persons"
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.persons_label())
    }
}
