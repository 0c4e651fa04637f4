use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Candidate, CandidateId, NavigationContext};
use super::errors::{NotFound, ValidationError};
use super::fixtures;

/// Sentinel accepted wherever a role filter is parsed from user input.
pub const ALL_ROLES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleFilter {
    #[default]
    All,
    Role(String),
}

impl RoleFilter {
    pub fn role(role: impl Into<String>) -> Self {
        RoleFilter::from(role.into())
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Role(role) => candidate.applied_job == *role,
        }
    }
}

impl From<String> for RoleFilter {
    fn from(value: String) -> Self {
        if value == ALL_ROLES {
            RoleFilter::All
        } else {
            RoleFilter::Role(value)
        }
    }
}

impl From<RoleFilter> for String {
    fn from(filter: RoleFilter) -> Self {
        match filter {
            RoleFilter::All => ALL_ROLES.to_string(),
            RoleFilter::Role(role) => role,
        }
    }
}

impl FromStr for RoleFilter {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(RoleFilter::from(value.to_string()))
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::All => f.write_str(ALL_ROLES),
            RoleFilter::Role(role) => f.write_str(role),
        }
    }
}

/// Candidate records plus the job-role enumeration the role filter accepts.
#[derive(Debug, Clone, Default)]
pub struct CandidateDirectory {
    candidates: Vec<Candidate>,
    roles: Vec<String>,
}

impl CandidateDirectory {
    pub fn new(candidates: Vec<Candidate>, roles: Vec<String>) -> Self {
        let mut directory = Self {
            candidates,
            roles: Vec::with_capacity(roles.len()),
        };
        for role in roles {
            directory.register_role(role);
        }
        directory
    }

    pub fn seeded() -> Self {
        Self::new(fixtures::candidates(), fixtures::job_roles())
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Add a role to the enumeration; duplicates are ignored.
    pub fn register_role(&mut self, role: impl Into<String>) {
        let role = role.into();
        if role != ALL_ROLES && !self.roles.contains(&role) {
            self.roles.push(role);
        }
    }

    pub fn validate_role(&self, filter: &RoleFilter) -> Result<(), ValidationError> {
        match filter {
            RoleFilter::All => Ok(()),
            RoleFilter::Role(role) if self.roles.contains(role) => Ok(()),
            RoleFilter::Role(role) => Err(ValidationError::UnknownRole(role.clone())),
        }
    }

    /// Candidates whose applied job equals the role exactly; `All` returns everyone.
    pub fn filter_by_role(&self, filter: &RoleFilter) -> Vec<Candidate> {
        let filtered: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|candidate| filter.matches(candidate))
            .cloned()
            .collect();
        debug!(role = %filter, matched = filtered.len(), "filtered candidates by role");
        filtered
    }

    /// Display copy of every candidate with the applied job replaced by the context's job.
    pub fn with_navigation_override(&self, context: Option<&NavigationContext>) -> Vec<Candidate> {
        self.candidates
            .iter()
            .map(|candidate| apply_override(candidate, context))
            .collect()
    }

    /// Candidates for the list view: a navigation context suppresses the role filter.
    pub fn visible(
        &self,
        filter: &RoleFilter,
        context: Option<&NavigationContext>,
    ) -> Vec<Candidate> {
        match context {
            Some(_) => self.with_navigation_override(context),
            None => self.filter_by_role(filter),
        }
    }

    pub fn detail(&self, id: CandidateId) -> Result<&Candidate, NotFound> {
        self.candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .ok_or(NotFound::candidate(id))
    }

    /// Candidate counts per status label, in first-seen order.
    pub fn status_breakdown(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for candidate in &self.candidates {
            let label = candidate.status.label();
            match counts.iter_mut().find(|(existing, _)| existing.as_str() == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
        counts
    }
}

pub(crate) fn apply_override(candidate: &Candidate, context: Option<&NavigationContext>) -> Candidate {
    let mut shown = candidate.clone();
    if let Some(context) = context {
        shown.applied_job = context.job_title.clone();
    }
    shown
}
