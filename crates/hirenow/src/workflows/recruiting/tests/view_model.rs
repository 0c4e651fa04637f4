use std::sync::Arc;

use chrono::NaiveDate;

use super::common::{candidate, resumes, view_model, MemoryNotifier, MATCH_DELAY};
use crate::workflows::recruiting::catalog::JobCatalog;
use crate::workflows::recruiting::directory::{CandidateDirectory, RoleFilter};
use crate::workflows::recruiting::domain::{CandidateId, JobDraft, JobId, Outreach};
use crate::workflows::recruiting::errors::{NotFound, RecruitingError, ValidationError};
use crate::workflows::recruiting::matching::{FixtureMatchEngine, MatchSession, MatchState};
use crate::workflows::recruiting::ranking::ScoreTier;
use crate::workflows::recruiting::scheduler::ManualScheduler;
use crate::workflows::recruiting::RecruitingViewModel;

fn two_candidate_view_model() -> (RecruitingViewModel, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::default());
    let directory = CandidateDirectory::new(
        vec![candidate(1, "DevOps Engineer", 95), candidate(2, "Product Manager", 90)],
        vec!["DevOps Engineer".to_string(), "Product Manager".to_string()],
    );
    let session = MatchSession::new(
        Arc::new(ManualScheduler::new()),
        Arc::new(FixtureMatchEngine),
        notifier.clone(),
        MATCH_DELAY,
    );
    let view_model =
        RecruitingViewModel::new(JobCatalog::seeded(), directory, session, notifier.clone());
    (view_model, notifier)
}

fn ids(view_model: &RecruitingViewModel) -> Vec<CandidateId> {
    view_model
        .filtered_candidates()
        .iter()
        .map(|candidate| candidate.id)
        .collect()
}

#[test]
fn role_filter_narrows_candidate_list() {
    let (mut view_model, notifier) = two_candidate_view_model();
    assert_eq!(ids(&view_model), vec![CandidateId(1), CandidateId(2)]);

    view_model
        .select_role(RoleFilter::role("Product Manager"))
        .expect("known role");

    assert_eq!(ids(&view_model), vec![CandidateId(2)]);
    let tier = ScoreTier::from(view_model.filtered_candidates()[0].ai_score);
    assert_eq!(tier, ScoreTier::High);
    assert_eq!(notifier.titles(), vec!["Filter Applied"]);
}

#[test]
fn unknown_role_keeps_previous_filter() {
    let (mut view_model, notifier) = two_candidate_view_model();
    view_model
        .select_role(RoleFilter::role("DevOps Engineer"))
        .expect("known role");

    let err = view_model
        .select_role(RoleFilter::role("Astronaut"))
        .expect_err("unknown role");

    assert_eq!(
        err,
        RecruitingError::Validation(ValidationError::UnknownRole("Astronaut".to_string()))
    );
    assert_eq!(view_model.role_filter(), &RoleFilter::role("DevOps Engineer"));
    assert_eq!(notifier.destructive_count(), 1);
}

#[test]
fn candidate_list_is_ranked_by_ai_score() {
    let (view_model, _scheduler, _notifier) = view_model();
    let scores: Vec<u8> = view_model
        .filtered_candidates()
        .iter()
        .map(|candidate| candidate.ai_score.value())
        .collect();

    assert_eq!(scores, vec![95, 92, 91, 90, 88, 87, 86, 83]);
}

#[test]
fn posted_job_becomes_selectable_role() {
    let (mut view_model, _scheduler, notifier) = view_model();
    let before = view_model.jobs().len();

    let job = view_model
        .post_job(JobDraft::new("Platform Engineer", "Acme").with_description("Run the platform."))
        .expect("valid draft");

    assert_eq!(job.id, JobId(before as u32 + 1));
    assert_eq!(view_model.jobs()[0].id, job.id);
    assert!(view_model.roles().contains(&"Platform Engineer".to_string()));
    view_model
        .select_role(RoleFilter::role("Platform Engineer"))
        .expect("new role accepted");
    assert!(view_model.filtered_candidates().is_empty());
    assert_eq!(
        view_model.job_description_options()[0],
        "Platform Engineer - Acme"
    );
    assert_eq!(notifier.titles()[0], "Job Posted Successfully");
}

#[test]
fn invalid_post_reports_required_fields() {
    let (mut view_model, _scheduler, notifier) = view_model();
    let before = view_model.jobs().len();

    let err = view_model
        .post_job(JobDraft::new("", "Acme").with_description("text"))
        .expect_err("missing title");

    assert_eq!(err, RecruitingError::Validation(ValidationError::MissingTitle));
    assert_eq!(view_model.jobs().len(), before);
    let last = notifier.last().expect("error notification");
    assert_eq!(last.description, "Please fill in all required fields");
}

#[test]
fn selecting_job_overrides_candidate_labels() {
    let (mut view_model, _scheduler, notifier) = view_model();
    view_model
        .select_role(RoleFilter::role("Product Manager"))
        .expect("known role");

    let context = view_model.select_job(JobId(3)).expect("job 3");

    assert_eq!(context.job_title, "DevOps Engineer");
    assert_eq!(view_model.navigation(), Some(&context));
    let shown = view_model.filtered_candidates();
    assert_eq!(shown.len(), 8);
    assert!(shown
        .iter()
        .all(|candidate| candidate.applied_job == "DevOps Engineer"));
    assert_eq!(
        view_model
            .candidate_detail(CandidateId(1))
            .expect("present")
            .applied_job,
        "DevOps Engineer"
    );
    assert_eq!(notifier.last().expect("notified").title, "Viewing Candidates");

    view_model.clear_navigation();
    assert_eq!(view_model.filtered_candidates().len(), 2);
    assert_eq!(
        view_model
            .candidate_detail(CandidateId(1))
            .expect("present")
            .applied_job,
        "Senior Full Stack Developer"
    );
}

#[test]
fn selecting_missing_job_is_not_found() {
    let (mut view_model, _scheduler, _notifier) = view_model();

    assert_eq!(
        view_model.select_job(JobId(99)),
        Err(RecruitingError::NotFound(NotFound::job(JobId(99))))
    );
    assert_eq!(view_model.navigation(), None);
}

#[test]
fn full_match_workflow_through_view_model() {
    let (mut view_model, scheduler, _notifier) = view_model();
    let label = view_model.job_description_options()[2].clone();

    view_model.select_job_description(label).expect("selected");
    view_model.attach_resumes(resumes(&["one.pdf", "two.pdf", "three.pdf"]));
    view_model.start_match().expect("started");
    assert_eq!(view_model.session_state(), MatchState::Matching);

    scheduler.advance(MATCH_DELAY);

    assert_eq!(view_model.session_state(), MatchState::Results);
    assert_eq!(view_model.match_results().len(), 5);
    assert_eq!(view_model.attached_resumes().len(), 3);

    view_model.reset_match();
    assert_eq!(view_model.session_state(), MatchState::Idle);
    assert!(view_model.match_results().is_empty());
    assert!(view_model.attached_resumes().is_empty());
}

#[test]
fn job_matches_rank_by_match_percentage() {
    let (view_model, _scheduler, _notifier) = view_model();

    let matches = view_model.job_matches(JobId(4)).expect("job 4");

    let percentages: Vec<u8> = matches
        .iter()
        .map(|result| result.match_percentage.value())
        .collect();
    assert_eq!(percentages, vec![95, 92, 89, 84, 82]);
    assert!(matches
        .iter()
        .all(|result| result.candidate.applied_job == "Product Manager"));
    assert_eq!(view_model.session_state(), MatchState::Idle);
}

#[test]
fn outreach_notifies_by_channel() {
    let (view_model, _scheduler, notifier) = view_model();

    view_model
        .contact_candidate(CandidateId(3), Outreach::PhoneCall)
        .expect("present");
    view_model
        .contact_candidate(CandidateId(3), Outreach::RejectionEmail)
        .expect("present");
    view_model.view_resume(CandidateId(3)).expect("present");

    let events = notifier.events();
    assert_eq!(events[0].title, "Call Initiated");
    assert!(events[0].description.starts_with("Calling Sarah Williams at "));
    assert_eq!(events[1].title, "Email Sent");
    assert_eq!(events[1].description, "Not Selected email sent to Sarah Williams");
    assert_eq!(events[2].title, "Resume Viewer");

    assert_eq!(
        view_model.contact_candidate(CandidateId(99), Outreach::InterviewEmail),
        Err(RecruitingError::NotFound(NotFound::candidate(CandidateId(99))))
    );
}

#[test]
fn dashboard_reflects_live_state() {
    let (mut view_model, _scheduler, _notifier) = view_model();
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");

    let summary = view_model.dashboard(today);
    assert_eq!(summary.as_of, today);
    assert_eq!(summary.active_jobs, 6);
    assert_eq!(summary.hot_jobs, 1);
    assert_eq!(summary.total_applicants, 42 + 28 + 35 + 56 + 31 + 67);
    assert_eq!(summary.total_candidates, 8);
    let top: Vec<_> = summary
        .top_candidates
        .iter()
        .map(|candidate| candidate.name.as_str())
        .collect();
    assert_eq!(top, vec!["Sarah Williams", "Alice Johnson", "Lisa Brown"]);

    view_model
        .post_job(JobDraft::new("Platform Engineer", "Acme").with_description("Run it."))
        .expect("valid draft");
    let summary = view_model.dashboard(today);
    assert_eq!(summary.active_jobs, 7);
    assert_eq!(summary.total_applicants, 259);
}

#[test]
fn match_state_subscription_sees_completion() {
    let (mut view_model, scheduler, _notifier) = view_model();
    let mut receiver = view_model.subscribe_match_state();

    view_model
        .select_job_description("DevOps Engineer - CloudTech Solutions")
        .expect("selected");
    view_model.attach_resumes(resumes(&["a.pdf"]));
    view_model.start_match().expect("started");
    scheduler.advance(MATCH_DELAY);

    assert!(receiver.has_changed().expect("sender alive"));
    assert_eq!(*receiver.borrow_and_update(), MatchState::Results);
}
