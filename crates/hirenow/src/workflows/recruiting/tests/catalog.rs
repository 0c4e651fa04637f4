use crate::workflows::recruiting::catalog::JobCatalog;
use crate::workflows::recruiting::domain::{JobDraft, JobId, JobStatus, UploadedFile};
use crate::workflows::recruiting::errors::{NotFound, ValidationError};
use crate::workflows::recruiting::fixtures;

fn draft() -> JobDraft {
    JobDraft::new("Site Reliability Engineer", "Acme Cloud")
        .with_description("Keep the platform running.")
}

#[test]
fn seeded_catalog_exposes_fixture_jobs() {
    let catalog = JobCatalog::seeded();

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.jobs()[0].title, "Senior Full Stack Developer");
    assert_eq!(catalog.select(JobId(4)).expect("job 4").status, JobStatus::Hot);
}

#[test]
fn posting_prepends_with_next_id_and_defaults() {
    let mut catalog = JobCatalog::seeded();
    let before = catalog.len();

    let job = catalog.post(draft()).expect("valid draft");

    assert_eq!(job.id, JobId(before as u32 + 1));
    assert_eq!(catalog.len(), before + 1);
    assert_eq!(catalog.jobs()[0], job);
    assert_eq!(job.location, "Remote");
    assert_eq!(job.employment_type, "Full-time");
    assert_eq!(job.salary, "Competitive");
    assert_eq!(job.applicants, 0);
    assert_eq!(job.posted, "Just now");
    assert_eq!(job.requirements, vec!["Requirements from JD"]);
    assert_eq!(job.status, JobStatus::Active);
}

#[test]
fn provided_optional_fields_are_kept() {
    let mut catalog = JobCatalog::default();
    let job = catalog
        .post(
            draft()
                .with_location("Berlin, DE")
                .with_employment_type("Contract")
                .with_salary("  "),
        )
        .expect("valid draft");

    assert_eq!(job.id, JobId(1));
    assert_eq!(job.location, "Berlin, DE");
    assert_eq!(job.employment_type, "Contract");
    assert_eq!(job.salary, "Competitive");
}

#[test]
fn attachment_substitutes_for_description() {
    let mut catalog = JobCatalog::seeded();
    let job = catalog
        .post(
            JobDraft::new("Platform Engineer", "Acme Cloud")
                .with_attachment(UploadedFile::new("platform.pdf")),
        )
        .expect("attachment is enough");

    assert!(job.description.is_empty());
}

#[test]
fn invalid_drafts_leave_catalog_untouched() {
    let mut catalog = JobCatalog::seeded();
    let before = catalog.jobs().to_vec();

    let cases = [
        (
            JobDraft::new("", "Acme").with_description("text"),
            ValidationError::MissingTitle,
        ),
        (
            JobDraft::new("Engineer", "   ").with_description("text"),
            ValidationError::MissingCompany,
        ),
        (
            JobDraft::new("Engineer", "Acme"),
            ValidationError::MissingDescription,
        ),
    ];

    for (draft, expected) in cases {
        assert_eq!(catalog.post(draft), Err(expected));
    }
    assert_eq!(catalog.jobs(), before.as_slice());
}

#[test]
fn next_id_skips_past_taken_identifiers() {
    let mut jobs = fixtures::jobs();
    jobs.truncate(2);
    jobs[0].id = JobId(2);
    jobs[1].id = JobId(3);
    let mut catalog = JobCatalog::new(jobs);

    let job = catalog.post(draft()).expect("valid draft");

    assert_eq!(job.id, JobId(4));
}

#[test]
fn unknown_job_is_not_found() {
    let catalog = JobCatalog::seeded();

    assert_eq!(catalog.select(JobId(99)), Err(NotFound::job(JobId(99))));
    assert_eq!(
        catalog.navigation_context(JobId(99)),
        Err(NotFound::job(JobId(99)))
    );
}

#[test]
fn navigation_context_carries_job_title() {
    let catalog = JobCatalog::seeded();
    let context = catalog.navigation_context(JobId(3)).expect("job 3");

    assert_eq!(context.job_id, JobId(3));
    assert_eq!(context.job_title, "DevOps Engineer");
}

#[test]
fn job_description_options_follow_catalog_order() {
    let mut catalog = JobCatalog::seeded();
    catalog.post(draft()).expect("valid draft");

    let options = catalog.job_description_options();

    assert_eq!(options.len(), catalog.len());
    assert_eq!(options[0], "Site Reliability Engineer - Acme Cloud");
    for (option, job) in options.iter().zip(catalog.jobs()) {
        assert_eq!(option, &job.listing_label());
    }
}
