use crate::infra::{await_enhancement, await_results, parse_date, Shell};
use crate::render;
use chrono::{Local, NaiveDate};
use clap::Args;
use hirenow::error::AppError;
use hirenow::workflows::recruiting::{
    JobId, Outreach, RecruitingError, RoleFilter, UploadedFile,
};

const DEMO_RESUMES: [&str; 3] = ["alice_johnson.pdf", "michael_chen.pdf", "sarah_williams.pdf"];

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the dashboard date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the AI match portion of the demo.
    #[arg(long)]
    pub(crate) skip_match: bool,
}

pub(crate) async fn run_demo(shell: &Shell, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, skip_match } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut view_model = shell.view_model();

    println!("HireNow recruiting demo\n");
    render::print_dashboard(&view_model.dashboard(today));

    println!("\nPost a job");
    let mut editor = shell.editor();
    editor.edit(|draft| {
        draft.title = "Platform Engineer".to_string();
        draft.company = "HireNow Labs".to_string();
        draft.location = Some("Austin, TX".to_string());
        draft.description = "Own the internal developer platform.".to_string();
    });
    editor.enhance().map_err(RecruitingError::from)?;
    await_enhancement(&editor, shell.config.matching.enhance_delay).await;
    let posted = view_model.post_job(editor.draft())?;
    editor.clear();
    if let Err(err) = view_model.post_job(editor.draft()) {
        println!("  Empty draft rejected: {err}");
    }
    println!();
    render::print_jobs(view_model.jobs());

    println!("\nFilter candidates by role");
    view_model.select_role(RoleFilter::role("Product Manager"))?;
    render::print_candidates("Product Manager candidates", &view_model.filtered_candidates());
    if let Err(err) = view_model.select_role(RoleFilter::role("Astronaut")) {
        println!("  Filter rejected: {err}");
    }
    view_model.select_role(RoleFilter::role(posted.title.clone()))?;
    render::print_candidates(
        &format!("{} candidates", posted.title),
        &view_model.filtered_candidates(),
    );
    view_model.select_role(RoleFilter::All)?;

    println!("\nBrowse applicants from a job posting");
    let context = view_model.select_job(JobId(3))?;
    let applicants = view_model.filtered_candidates();
    render::print_candidates(&format!("Candidates for {}", context.job_title), &applicants);
    if let Some(top) = applicants.first() {
        let detail = view_model.candidate_detail(top.id)?;
        render::print_candidate_detail(&detail);
        view_model.view_resume(top.id)?;
        view_model.contact_candidate(top.id, Outreach::InterviewEmail)?;
        view_model.contact_candidate(top.id, Outreach::PhoneCall)?;
    }
    view_model.clear_navigation();

    if skip_match {
        return Ok(());
    }

    println!("\nAI candidate matching");
    if let Err(err) = view_model.start_match() {
        println!("  Match rejected: {err}");
    }
    let options = view_model.job_description_options();
    let label = options
        .iter()
        .find(|option| option.starts_with("DevOps Engineer"))
        .or_else(|| options.first())
        .cloned()
        .unwrap_or_default();
    view_model.select_job_description(label)?;
    view_model.attach_resumes(DEMO_RESUMES.iter().map(|name| UploadedFile::new(*name)));
    view_model.start_match()?;
    await_results(&view_model).await;

    let results = view_model.match_results();
    render::print_matches(&results);
    if let Some(best) = results.first() {
        view_model.edit_candidate(best.candidate.id)?;
        view_model.save_edit()?;
    }

    view_model.reset_match();
    println!("Session state after reset: {}", view_model.session_state().label());
    Ok(())
}
