use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::domain::{CandidateId, MatchResult, UploadedFile};
use super::errors::{NotFound, PreconditionError, RecruitingError, ValidationError};
use super::fixtures;
use super::notifications::{Notification, Notifier};
use super::ranking::{rank, RankField};
use super::scheduler::{DeferredTask, DelayScheduler, ScheduledTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    Idle,
    JdSelected,
    Matching,
    Results,
}

impl MatchState {
    pub const fn label(self) -> &'static str {
        match self {
            MatchState::Idle => "Idle",
            MatchState::JdSelected => "Job description selected",
            MatchState::Matching => "Matching",
            MatchState::Results => "Results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    NotEditing,
    Editing(CandidateId),
}

/// Produces ranked match results for a job description and a set of resumes.
pub trait MatchEngine: Send + Sync {
    fn match_candidates(&self, job_description: &str, resumes: &[UploadedFile])
        -> Vec<MatchResult>;
}

/// Engine returning the seeded candidate pool. Resumes are never read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureMatchEngine;

impl MatchEngine for FixtureMatchEngine {
    fn match_candidates(
        &self,
        job_description: &str,
        _resumes: &[UploadedFile],
    ) -> Vec<MatchResult> {
        // Picker labels read "Title - Company"; results are labelled with the title only.
        let job_title = job_description
            .split(" - ")
            .next()
            .unwrap_or(job_description)
            .trim();
        rank(fixtures::match_pool(job_title), RankField::MatchPercentage)
    }
}

struct SessionInner {
    generation: u64,
    state: MatchState,
    job_description: Option<String>,
    resumes: Vec<UploadedFile>,
    results: Vec<MatchResult>,
    editing: EditState,
    state_tx: watch::Sender<MatchState>,
}

impl SessionInner {
    fn transition(&mut self, next: MatchState) {
        debug!(from = self.state.label(), to = next.label(), "match session transition");
        self.state = next;
        self.state_tx.send_replace(next);
    }
}

fn lock_inner(inner: &Mutex<SessionInner>) -> MutexGuard<'_, SessionInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// AI match workflow: pick a job description, attach resumes, run the simulated match.
pub struct MatchSession {
    inner: Arc<Mutex<SessionInner>>,
    scheduler: Arc<dyn DelayScheduler>,
    engine: Arc<dyn MatchEngine>,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl MatchSession {
    pub fn new(
        scheduler: Arc<dyn DelayScheduler>,
        engine: Arc<dyn MatchEngine>,
        notifier: Arc<dyn Notifier>,
        delay: Duration,
    ) -> Self {
        let (state_tx, _) = watch::channel(MatchState::Idle);
        let inner = SessionInner {
            generation: 0,
            state: MatchState::Idle,
            job_description: None,
            resumes: Vec::new(),
            results: Vec::new(),
            editing: EditState::NotEditing,
            state_tx,
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
            scheduler,
            engine,
            notifier,
            delay,
            pending: None,
        }
    }

    pub fn state(&self) -> MatchState {
        self.lock().state
    }

    pub fn job_description(&self) -> Option<String> {
        self.lock().job_description.clone()
    }

    pub fn resumes(&self) -> Vec<UploadedFile> {
        self.lock().resumes.clone()
    }

    pub fn results(&self) -> Vec<MatchResult> {
        self.lock().results.clone()
    }

    pub fn editing(&self) -> EditState {
        self.lock().editing
    }

    /// Receiver that observes every state change, including the delayed completion.
    pub fn subscribe(&self) -> watch::Receiver<MatchState> {
        self.lock().state_tx.subscribe()
    }

    /// Ranked matches for a job description without going through the session workflow.
    pub fn preview(&self, job_description: &str) -> Vec<MatchResult> {
        self.engine.match_candidates(job_description, &[])
    }

    pub fn select_job_description(&mut self, text: impl Into<String>) -> Result<(), RecruitingError> {
        let text = text.into();
        let outcome = self.try_select_job_description(text);
        self.report(outcome)
    }

    fn try_select_job_description(&self, text: String) -> Result<(), RecruitingError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyJobDescription.into());
        }

        let mut inner = self.lock();
        match inner.state {
            MatchState::Matching => return Err(PreconditionError::MatchInProgress.into()),
            MatchState::Results => return Err(PreconditionError::ResultsAvailable.into()),
            MatchState::Idle | MatchState::JdSelected => {}
        }

        info!(job_description = %text, "job description selected");
        inner.job_description = Some(text.clone());
        inner.transition(MatchState::JdSelected);
        drop(inner);

        self.notifier
            .notify(Notification::info("Job Description Selected", text));
        Ok(())
    }

    /// Append resume handles; the session state is unchanged. Returns how many were added.
    pub fn attach_resumes<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let added = {
            let mut inner = self.lock();
            let before = inner.resumes.len();
            inner.resumes.extend(files);
            inner.resumes.len() - before
        };

        info!(added, "resumes attached");
        self.notifier.notify(Notification::info(
            "Resumes Uploaded",
            format!("{added} resume(s) uploaded successfully"),
        ));
        added
    }

    /// Begin the simulated match. Results arrive after the configured delay.
    pub fn start_match(&mut self) -> Result<(), RecruitingError> {
        let outcome = self.try_start_match();
        self.report(outcome)
    }

    fn try_start_match(&mut self) -> Result<(), RecruitingError> {
        let (generation, job_description, resumes) = {
            let mut inner = self.lock();
            match inner.state {
                MatchState::Idle => return Err(PreconditionError::NoJobDescription.into()),
                MatchState::Matching => return Err(PreconditionError::MatchInProgress.into()),
                MatchState::Results => return Err(PreconditionError::ResultsAvailable.into()),
                MatchState::JdSelected => {}
            }
            if inner.resumes.is_empty() {
                return Err(PreconditionError::NoResumes.into());
            }

            inner.generation += 1;
            inner.transition(MatchState::Matching);
            (
                inner.generation,
                inner.job_description.clone().unwrap_or_default(),
                inner.resumes.clone(),
            )
        };

        info!(
            generation,
            resumes = resumes.len(),
            delay_ms = self.delay.as_millis() as u64,
            "ai matching started"
        );
        self.notifier.notify(Notification::info(
            "AI Matching Started",
            "Processing resumes and matching with job requirements...",
        ));

        let task = completion_task(
            Arc::downgrade(&self.inner),
            generation,
            self.engine.clone(),
            self.notifier.clone(),
            job_description,
            resumes,
        );
        self.pending = Some(self.scheduler.schedule(self.delay, task));
        Ok(())
    }

    /// Return to `Idle`, dropping the selection, attachments, results, and any pending completion.
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }

        {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.job_description = None;
            inner.resumes.clear();
            inner.results.clear();
            inner.editing = EditState::NotEditing;
            inner.transition(MatchState::Idle);
        }

        info!("match session reset");
        self.notifier.notify(Notification::info(
            "Match Reset",
            "Attached resumes and results were cleared",
        ));
    }

    pub fn edit_candidate(&mut self, id: CandidateId) -> Result<(), RecruitingError> {
        let outcome = self.try_edit_candidate(id);
        self.report(outcome)
    }

    fn try_edit_candidate(&self, id: CandidateId) -> Result<(), RecruitingError> {
        {
            let mut inner = self.lock();
            if inner.state != MatchState::Results {
                return Err(PreconditionError::NoResults.into());
            }
            if !inner.results.iter().any(|result| result.candidate.id == id) {
                return Err(NotFound::candidate(id).into());
            }
            inner.editing = EditState::Editing(id);
        }

        debug!(candidate_id = %id, "editing match result");
        self.notifier.notify(Notification::info(
            "Edit Mode",
            "You can now edit candidate details",
        ));
        Ok(())
    }

    /// Leave edit mode. No candidate fields are editable, so nothing is written.
    pub fn save_edit(&mut self) -> Result<(), RecruitingError> {
        let outcome = self.try_save_edit();
        self.report(outcome)
    }

    fn try_save_edit(&self) -> Result<(), RecruitingError> {
        {
            let mut inner = self.lock();
            if inner.editing == EditState::NotEditing {
                return Err(PreconditionError::NotEditing.into());
            }
            inner.editing = EditState::NotEditing;
        }

        self.notifier.notify(Notification::info(
            "Changes Saved",
            "Candidate details updated successfully",
        ));
        Ok(())
    }

    fn report<T>(&self, outcome: Result<T, RecruitingError>) -> Result<T, RecruitingError> {
        if let Err(err) = &outcome {
            warn!(error = %err, "match session transition rejected");
            self.notifier.notify(Notification::from_error(err));
        }
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        lock_inner(&self.inner)
    }
}

fn completion_task(
    session: Weak<Mutex<SessionInner>>,
    generation: u64,
    engine: Arc<dyn MatchEngine>,
    notifier: Arc<dyn Notifier>,
    job_description: String,
    resumes: Vec<UploadedFile>,
) -> DeferredTask {
    Box::new(move || {
        let Some(session) = session.upgrade() else {
            debug!(generation, "match session dropped before completion");
            return;
        };

        let found = {
            let mut inner = lock_inner(&session);
            if inner.generation != generation || inner.state != MatchState::Matching {
                debug!(generation, "discarding stale match completion");
                return;
            }
            inner.results = engine.match_candidates(&job_description, &resumes);
            inner.editing = EditState::NotEditing;
            inner.transition(MatchState::Results);
            inner.results.len()
        };

        info!(generation, matches = found, "ai matching complete");
        notifier.notify(Notification::info(
            "AI Matching Complete",
            format!("Found {found} potential matches"),
        ));
    })
}
