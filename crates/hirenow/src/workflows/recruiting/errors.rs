use std::fmt;

use super::domain::{CandidateId, JobId};

/// Required input missing or not recognised. Nothing is mutated when raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("job title is required")]
    MissingTitle,
    #[error("company is required")]
    MissingCompany,
    #[error("a job description or an attached file is required")]
    MissingDescription,
    #[error("job description selection is empty")]
    EmptyJobDescription,
    #[error("unknown job role '{0}'")]
    UnknownRole(String),
}

/// Transition attempted from a state that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("no job description selected")]
    NoJobDescription,
    #[error("no resumes attached")]
    NoResumes,
    #[error("matching is already in progress")]
    MatchInProgress,
    #[error("match results are already available; reset to start over")]
    ResultsAvailable,
    #[error("no match results to edit")]
    NoResults,
    #[error("no candidate is being edited")]
    NotEditing,
    #[error("job description enhancement is already in progress")]
    EnhanceInProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Job,
    Candidate,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Job => f.write_str("job"),
            RecordKind::Candidate => f.write_str("candidate"),
        }
    }
}

/// Lookup of an identifier that is not in the current in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {id} not found")]
pub struct NotFound {
    pub kind: RecordKind,
    pub id: u32,
}

impl NotFound {
    pub const fn job(id: JobId) -> Self {
        Self {
            kind: RecordKind::Job,
            id: id.0,
        }
    }

    pub const fn candidate(id: CandidateId) -> Self {
        Self {
            kind: RecordKind::Candidate,
            id: id.0,
        }
    }
}

/// Error raised by view-model transitions. Every variant is recoverable by the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecruitingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    NotFound(#[from] NotFound),
}

impl RecruitingError {
    /// Text surfaced to the user through the notification layer.
    pub fn user_message(&self) -> String {
        match self {
            RecruitingError::Validation(ValidationError::UnknownRole(role)) => {
                format!("\"{role}\" is not an open job role")
            }
            RecruitingError::Validation(ValidationError::EmptyJobDescription) => {
                "Please select a job description first".to_string()
            }
            RecruitingError::Validation(_) => "Please fill in all required fields".to_string(),
            RecruitingError::Precondition(PreconditionError::NoJobDescription) => {
                "Please select a job description first".to_string()
            }
            RecruitingError::Precondition(PreconditionError::NoResumes) => {
                "Please upload at least one resume".to_string()
            }
            RecruitingError::Precondition(PreconditionError::MatchInProgress) => {
                "AI matching is still running".to_string()
            }
            RecruitingError::Precondition(PreconditionError::ResultsAvailable) => {
                "Start a new match to change the selection".to_string()
            }
            RecruitingError::Precondition(PreconditionError::NoResults) => {
                "Run an AI match before editing candidates".to_string()
            }
            RecruitingError::Precondition(PreconditionError::NotEditing) => {
                "Select a candidate to edit first".to_string()
            }
            RecruitingError::Precondition(PreconditionError::EnhanceInProgress) => {
                "The job description is already being enhanced".to_string()
            }
            RecruitingError::NotFound(missing) => format!("The requested {} no longer exists", missing.kind),
        }
    }
}
