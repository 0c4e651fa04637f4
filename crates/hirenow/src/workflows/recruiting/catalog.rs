use tracing::{debug, info};

use super::domain::{JobDraft, JobId, JobPosting, JobStatus, NavigationContext};
use super::errors::{NotFound, ValidationError};
use super::fixtures;

const DEFAULT_LOCATION: &str = "Remote";
const DEFAULT_EMPLOYMENT_TYPE: &str = "Full-time";
const DEFAULT_SALARY: &str = "Competitive";
const POSTED_JUST_NOW: &str = "Just now";
const REQUIREMENTS_FROM_DESCRIPTION: &str = "Requirements from JD";

/// Ordered job postings; the newest posting is always first.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    pub fn seeded() -> Self {
        Self::new(fixtures::jobs())
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Validate and publish a draft at the head of the catalog.
    pub fn post(&mut self, draft: JobDraft) -> Result<JobPosting, ValidationError> {
        validate_draft(&draft)?;

        let id = self.next_id();
        let JobDraft {
            title,
            company,
            location,
            employment_type,
            salary,
            description,
            attachment,
        } = draft;

        let job = JobPosting {
            id,
            title,
            company,
            location: non_blank(location).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            employment_type: non_blank(employment_type)
                .unwrap_or_else(|| DEFAULT_EMPLOYMENT_TYPE.to_string()),
            salary: non_blank(salary).unwrap_or_else(|| DEFAULT_SALARY.to_string()),
            applicants: 0,
            posted: POSTED_JUST_NOW.to_string(),
            description,
            requirements: vec![REQUIREMENTS_FROM_DESCRIPTION.to_string()],
            status: JobStatus::Active,
        };

        info!(
            job_id = %job.id,
            title = %job.title,
            attachment = attachment.as_ref().map(|file| file.name.as_str()),
            "job posted"
        );
        self.jobs.insert(0, job.clone());
        Ok(job)
    }

    pub fn select(&self, id: JobId) -> Result<&JobPosting, NotFound> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or(NotFound::job(id))
    }

    /// Navigation state handed to the candidates screen when browsing a job's applicants.
    pub fn navigation_context(&self, id: JobId) -> Result<NavigationContext, NotFound> {
        let job = self.select(id)?;
        debug!(job_id = %job.id, "navigating to candidates for job");
        Ok(NavigationContext {
            job_id: job.id,
            job_title: job.title.clone(),
        })
    }

    /// Labels offered by the job description picker, in catalog order.
    pub fn job_description_options(&self) -> Vec<String> {
        self.jobs.iter().map(JobPosting::listing_label).collect()
    }

    // Seeds are contiguous, so `len + 1` is normally free; fall back past the maximum otherwise.
    fn next_id(&self) -> JobId {
        let candidate = JobId(self.jobs.len() as u32 + 1);
        if self.jobs.iter().all(|job| job.id != candidate) {
            return candidate;
        }

        let max = self.jobs.iter().map(|job| job.id.0).max().unwrap_or(0);
        JobId(max + 1)
    }
}

fn validate_draft(draft: &JobDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if draft.company.trim().is_empty() {
        return Err(ValidationError::MissingCompany);
    }
    if draft.description.trim().is_empty() && draft.attachment.is_none() {
        return Err(ValidationError::MissingDescription);
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
