//! Recruiting view-model: job catalog, candidate directory, and the AI match workflow.
//!
//! All state is in memory and seeded from fixtures. The "AI" scores are static fixture
//! values; the simulated processing delays run through [`scheduler::DelayScheduler`] so
//! they can be cancelled and driven deterministically in tests.

pub mod catalog;
pub mod dashboard;
pub mod directory;
pub mod domain;
pub mod enhance;
pub mod errors;
pub mod fixtures;
pub mod matching;
pub mod notifications;
pub mod ranking;
pub mod scheduler;
pub mod view_model;

#[cfg(test)]
mod tests;

pub use catalog::JobCatalog;
pub use dashboard::{DashboardSummary, StatusCount, TopCandidate};
pub use directory::{CandidateDirectory, RoleFilter, ALL_ROLES};
pub use domain::{
    Candidate, CandidateId, CandidateStatus, JobDraft, JobId, JobPosting, JobStatus,
    MatchResult, NavigationContext, Outreach, Score, ScoreOutOfRange, StatusBadge, UploadedFile,
};
pub use enhance::JobDraftEditor;
pub use errors::{NotFound, PreconditionError, RecordKind, RecruitingError, ValidationError};
pub use matching::{EditState, FixtureMatchEngine, MatchEngine, MatchSession, MatchState};
pub use notifications::{Notification, NotificationLevel, Notifier, TracingNotifier};
pub use ranking::{rank, RankField, Ranked, ScoreTier};
pub use scheduler::{DeferredTask, DelayScheduler, ManualScheduler, ScheduledTask, TokioScheduler};
pub use view_model::RecruitingViewModel;
