use hirenow::error::AppError;
use hirenow::workflows::recruiting::{
    Candidate, DashboardSummary, JobPosting, MatchResult, ScoreTier,
};
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn job_line(job: &JobPosting) -> String {
    format!(
        "#{} {} | {} | {} | {} | {} | {} applicants | posted {} [{}]",
        job.id,
        job.title,
        job.company,
        job.location,
        job.employment_type,
        job.salary,
        job.applicants,
        job.posted,
        job.status.label()
    )
}

pub(crate) fn print_jobs(jobs: &[JobPosting]) {
    println!("Job postings ({})", jobs.len());
    for job in jobs {
        println!("- {}", job_line(job));
    }
}

pub(crate) fn candidate_line(candidate: &Candidate) -> String {
    let tier = ScoreTier::from(candidate.ai_score);
    format!(
        "#{} {} | {} | {} | AI {} ({}, {})",
        candidate.id,
        candidate.name,
        candidate.applied_job,
        candidate.status,
        candidate.ai_score,
        tier.label(),
        tier.accent()
    )
}

pub(crate) fn print_candidates(heading: &str, candidates: &[Candidate]) {
    println!("{heading} ({})", candidates.len());
    if candidates.is_empty() {
        println!("- no candidates");
    }
    for candidate in candidates {
        println!("- {}", candidate_line(candidate));
    }
}

pub(crate) fn print_candidate_detail(candidate: &Candidate) {
    println!("{} <{}> {}", candidate.name, candidate.email, candidate.phone);
    println!(
        "  applied for {} | {} [{}]",
        candidate.applied_job,
        candidate.status,
        candidate.status.badge().color()
    );
    println!(
        "  notice {} | based in {}",
        candidate.notice_period, candidate.current_location
    );
    println!(
        "  salary {} -> expected {}",
        candidate.current_salary, candidate.expected_salary
    );
}

pub(crate) fn print_matches(results: &[MatchResult]) {
    println!("AI match results ({})", results.len());
    for result in results {
        let tier = ScoreTier::from(result.match_percentage);
        let candidate = &result.candidate;
        println!(
            "- {} | {} match ({}) | AI {} | {}",
            candidate.name,
            result.match_percentage,
            tier.label(),
            candidate.ai_score,
            candidate.status
        );
        if !candidate.skills.is_empty() {
            println!("  skills: {}", candidate.skills.join(", "));
        }
        if let Some(experience) = &candidate.experience {
            println!("  experience: {experience}");
        }
    }
}

pub(crate) fn print_dashboard(summary: &DashboardSummary) {
    println!("Recruiting dashboard ({})", summary.as_of);
    println!(
        "- {} active jobs ({} hot) | {} applicants | {} candidates",
        summary.active_jobs, summary.hot_jobs, summary.total_applicants, summary.total_candidates
    );

    println!("\nPipeline");
    for stage in &summary.pipeline {
        println!("- {}: {}", stage.status, stage.count);
    }

    println!("\nTop candidates");
    for candidate in &summary.top_candidates {
        println!(
            "- {} ({}) AI {} [{}]",
            candidate.name,
            candidate.applied_job,
            candidate.ai_score,
            candidate.tier.label()
        );
    }
}
