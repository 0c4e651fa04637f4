use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::JobCatalog;
use super::directory::CandidateDirectory;
use super::domain::{CandidateId, JobStatus, Score};
use super::ranking::{rank, RankField, ScoreTier};

const TOP_CANDIDATE_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCandidate {
    pub id: CandidateId,
    pub name: String,
    pub applied_job: String,
    pub ai_score: Score,
    pub tier: ScoreTier,
}

/// Headline numbers for the dashboard, derived from live catalog and directory state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub active_jobs: usize,
    pub hot_jobs: usize,
    pub total_applicants: u32,
    pub total_candidates: usize,
    pub pipeline: Vec<StatusCount>,
    pub top_candidates: Vec<TopCandidate>,
}

impl DashboardSummary {
    pub fn build(catalog: &JobCatalog, directory: &CandidateDirectory, as_of: NaiveDate) -> Self {
        let jobs = catalog.jobs();
        let hot_jobs = jobs.iter().filter(|job| job.status == JobStatus::Hot).count();
        let total_applicants = jobs.iter().map(|job| job.applicants).sum();

        let pipeline = directory
            .status_breakdown()
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();

        let top_candidates = rank(directory.candidates(), RankField::AiScore)
            .into_iter()
            .take(TOP_CANDIDATE_LIMIT)
            .map(|candidate| TopCandidate {
                id: candidate.id,
                name: candidate.name.clone(),
                applied_job: candidate.applied_job.clone(),
                ai_score: candidate.ai_score,
                tier: ScoreTier::from_score(candidate.ai_score),
            })
            .collect();

        Self {
            as_of,
            active_jobs: jobs.len(),
            hot_jobs,
            total_applicants,
            total_candidates: directory.candidates().len(),
            pipeline,
            top_candidates,
        }
    }
}
