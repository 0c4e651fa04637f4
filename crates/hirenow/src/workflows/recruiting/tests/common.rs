use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::MatchingConfig;
use crate::workflows::recruiting::domain::{
    Candidate, CandidateId, CandidateStatus, MatchResult, Score, UploadedFile,
};
use crate::workflows::recruiting::matching::{FixtureMatchEngine, MatchSession};
use crate::workflows::recruiting::notifications::{Notification, NotificationLevel, Notifier};
use crate::workflows::recruiting::scheduler::ManualScheduler;
use crate::workflows::recruiting::RecruitingViewModel;

pub(crate) const MATCH_DELAY: Duration = Duration::from_millis(2_000);

#[derive(Default)]
pub(crate) struct MemoryNotifier {
    events: Mutex<Vec<Notification>>,
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
    }
}

impl MemoryNotifier {
    pub(crate) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }

    pub(crate) fn titles(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|notification| notification.title)
            .collect()
    }

    pub(crate) fn last(&self) -> Option<Notification> {
        self.events().pop()
    }

    pub(crate) fn destructive_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|notification| notification.level == NotificationLevel::Destructive)
            .count()
    }

    pub(crate) fn clear(&self) {
        self.events.lock().expect("notifier mutex poisoned").clear();
    }
}

pub(crate) fn score(value: u8) -> Score {
    Score::new(value).expect("valid score")
}

pub(crate) fn candidate(id: u32, applied_job: &str, ai_score: u8) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: format!("Candidate {id}"),
        applied_job: applied_job.to_string(),
        status: CandidateStatus::UnderReview,
        ai_score: score(ai_score),
        email: format!("candidate{id}@email.com"),
        phone: "+1 (555) 000-0000".to_string(),
        notice_period: "2 weeks".to_string(),
        current_location: "Remote".to_string(),
        current_salary: "$100,000".to_string(),
        expected_salary: "$110,000".to_string(),
        skills: Vec::new(),
        experience: None,
        avatar: "CC".to_string(),
    }
}

pub(crate) fn match_result(id: u32, ai_score: u8, match_percentage: u8) -> MatchResult {
    MatchResult {
        candidate: candidate(id, "DevOps Engineer", ai_score),
        match_percentage: score(match_percentage),
    }
}

pub(crate) fn resumes(names: &[&str]) -> Vec<UploadedFile> {
    names.iter().map(|name| UploadedFile::new(*name)).collect()
}

pub(crate) fn session() -> (MatchSession, ManualScheduler, Arc<MemoryNotifier>) {
    let scheduler = ManualScheduler::new();
    let notifier = Arc::new(MemoryNotifier::default());
    let session = MatchSession::new(
        Arc::new(scheduler.clone()),
        Arc::new(FixtureMatchEngine),
        notifier.clone(),
        MATCH_DELAY,
    );
    (session, scheduler, notifier)
}

pub(crate) fn view_model() -> (RecruitingViewModel, ManualScheduler, Arc<MemoryNotifier>) {
    let scheduler = ManualScheduler::new();
    let notifier = Arc::new(MemoryNotifier::default());
    let config = MatchingConfig {
        match_delay: MATCH_DELAY,
        enhance_delay: Duration::from_millis(1_500),
    };
    let view_model =
        RecruitingViewModel::seeded(Arc::new(scheduler.clone()), notifier.clone(), &config);
    (view_model, scheduler, notifier)
}
