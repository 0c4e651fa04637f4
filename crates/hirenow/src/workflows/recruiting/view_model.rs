use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::MatchingConfig;

use super::catalog::JobCatalog;
use super::dashboard::DashboardSummary;
use super::directory::{apply_override, CandidateDirectory, RoleFilter};
use super::domain::{
    Candidate, CandidateId, JobDraft, JobId, JobPosting, MatchResult, NavigationContext, Outreach,
    UploadedFile,
};
use super::errors::RecruitingError;
use super::matching::{EditState, FixtureMatchEngine, MatchEngine, MatchSession, MatchState};
use super::notifications::{Notification, Notifier};
use super::ranking::{rank, RankField};
use super::scheduler::DelayScheduler;

/// Screen-facing state for the jobs, candidates, and AI match views.
///
/// Inbound actions mutate state and emit one notification describing the outcome;
/// outbound accessors return derived, read-only views.
pub struct RecruitingViewModel {
    catalog: JobCatalog,
    directory: CandidateDirectory,
    match_session: MatchSession,
    role_filter: RoleFilter,
    navigation: Option<NavigationContext>,
    notifier: Arc<dyn Notifier>,
}

impl RecruitingViewModel {
    pub fn new(
        catalog: JobCatalog,
        directory: CandidateDirectory,
        match_session: MatchSession,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            directory,
            match_session,
            role_filter: RoleFilter::All,
            navigation: None,
            notifier,
        }
    }

    /// View-model over the fixture data with the fixture match engine.
    pub fn seeded(
        scheduler: Arc<dyn DelayScheduler>,
        notifier: Arc<dyn Notifier>,
        config: &MatchingConfig,
    ) -> Self {
        Self::with_engine(scheduler, Arc::new(FixtureMatchEngine), notifier, config)
    }

    pub fn with_engine(
        scheduler: Arc<dyn DelayScheduler>,
        engine: Arc<dyn MatchEngine>,
        notifier: Arc<dyn Notifier>,
        config: &MatchingConfig,
    ) -> Self {
        let match_session =
            MatchSession::new(scheduler, engine, notifier.clone(), config.match_delay);
        Self::new(
            JobCatalog::seeded(),
            CandidateDirectory::seeded(),
            match_session,
            notifier,
        )
    }

    pub fn post_job(&mut self, draft: JobDraft) -> Result<JobPosting, RecruitingError> {
        let outcome = self.catalog.post(draft).map_err(RecruitingError::from);
        let job = self.report(outcome)?;

        self.directory.register_role(job.title.clone());
        self.notifier.notify(Notification::info(
            "Job Posted Successfully",
            "Your job posting has been published",
        ));
        Ok(job)
    }

    pub fn select_role(&mut self, filter: RoleFilter) -> Result<(), RecruitingError> {
        let outcome = self
            .directory
            .validate_role(&filter)
            .map_err(RecruitingError::from);
        self.report(outcome)?;

        info!(role = %filter, "role filter selected");
        self.notifier.notify(Notification::info(
            "Filter Applied",
            format!("Showing candidates for {filter}"),
        ));
        self.role_filter = filter;
        Ok(())
    }

    /// Open the candidates screen scoped to one job posting.
    pub fn select_job(&mut self, id: JobId) -> Result<NavigationContext, RecruitingError> {
        let outcome = self
            .catalog
            .navigation_context(id)
            .map_err(RecruitingError::from);
        let context = self.report(outcome)?;

        self.notifier.notify(Notification::info(
            "Viewing Candidates",
            format!("Candidates for {}", context.job_title),
        ));
        self.navigation = Some(context.clone());
        Ok(context)
    }

    pub fn clear_navigation(&mut self) {
        self.navigation = None;
    }

    pub fn select_job_description(&mut self, text: impl Into<String>) -> Result<(), RecruitingError> {
        self.match_session.select_job_description(text)
    }

    pub fn attach_resumes<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        self.match_session.attach_resumes(files)
    }

    pub fn start_match(&mut self) -> Result<(), RecruitingError> {
        self.match_session.start_match()
    }

    pub fn reset_match(&mut self) {
        self.match_session.reset();
    }

    pub fn edit_candidate(&mut self, id: CandidateId) -> Result<(), RecruitingError> {
        self.match_session.edit_candidate(id)
    }

    pub fn save_edit(&mut self) -> Result<(), RecruitingError> {
        self.match_session.save_edit()
    }

    pub fn contact_candidate(
        &self,
        id: CandidateId,
        outreach: Outreach,
    ) -> Result<(), RecruitingError> {
        let outcome = self.directory.detail(id).map_err(RecruitingError::from);
        let candidate = self.report(outcome)?;

        let notification = match outreach {
            Outreach::PhoneCall => Notification::info(
                "Call Initiated",
                format!("Calling {} at {}", candidate.name, candidate.phone),
            ),
            email => Notification::info(
                "Email Sent",
                format!("{} email sent to {}", email.label(), candidate.name),
            ),
        };
        info!(candidate_id = %id, outreach = outreach.label(), "candidate outreach");
        self.notifier.notify(notification);
        Ok(())
    }

    pub fn view_resume(&self, id: CandidateId) -> Result<(), RecruitingError> {
        let outcome = self.directory.detail(id).map_err(RecruitingError::from);
        let candidate = self.report(outcome)?;

        self.notifier.notify(Notification::info(
            "Resume Viewer",
            format!("Opening resume for {}", candidate.name),
        ));
        Ok(())
    }

    pub fn jobs(&self) -> &[JobPosting] {
        self.catalog.jobs()
    }

    pub fn job(&self, id: JobId) -> Result<&JobPosting, RecruitingError> {
        Ok(self.catalog.select(id)?)
    }

    pub fn roles(&self) -> &[String] {
        self.directory.roles()
    }

    pub fn role_filter(&self) -> &RoleFilter {
        &self.role_filter
    }

    pub fn navigation(&self) -> Option<&NavigationContext> {
        self.navigation.as_ref()
    }

    /// Candidate list as displayed, ranked by AI score.
    pub fn filtered_candidates(&self) -> Vec<Candidate> {
        let visible = self
            .directory
            .visible(&self.role_filter, self.navigation.as_ref());
        rank(visible, RankField::AiScore)
    }

    pub fn candidate_detail(&self, id: CandidateId) -> Result<Candidate, RecruitingError> {
        let candidate = self.directory.detail(id)?;
        Ok(apply_override(candidate, self.navigation.as_ref()))
    }

    pub fn job_description_options(&self) -> Vec<String> {
        self.catalog.job_description_options()
    }

    /// AI-matched candidates for a single posting, ranked by match percentage.
    pub fn job_matches(&self, id: JobId) -> Result<Vec<MatchResult>, RecruitingError> {
        let job = self.catalog.select(id)?;
        Ok(self.match_session.preview(&job.title))
    }

    pub fn match_results(&self) -> Vec<MatchResult> {
        self.match_session.results()
    }

    pub fn session_state(&self) -> MatchState {
        self.match_session.state()
    }

    pub fn attached_resumes(&self) -> Vec<UploadedFile> {
        self.match_session.resumes()
    }

    pub fn editing(&self) -> EditState {
        self.match_session.editing()
    }

    pub fn subscribe_match_state(&self) -> watch::Receiver<MatchState> {
        self.match_session.subscribe()
    }

    pub fn dashboard(&self, as_of: NaiveDate) -> DashboardSummary {
        DashboardSummary::build(&self.catalog, &self.directory, as_of)
    }

    fn report<T>(&self, outcome: Result<T, RecruitingError>) -> Result<T, RecruitingError> {
        if let Err(err) = &outcome {
            warn!(error = %err, "recruiting transition rejected");
            self.notifier.notify(Notification::from_error(err));
        }
        outcome
    }
}
