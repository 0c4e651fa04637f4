use crate::demo::{run_demo, DemoArgs};
use crate::infra::{await_enhancement, await_results, parse_date, parse_job_id, Shell};
use crate::render;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use hirenow::config::AppConfig;
use hirenow::error::AppError;
use hirenow::telemetry;
use hirenow::workflows::recruiting::{
    JobDraft, JobId, RecruitingError, RoleFilter, UploadedFile,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "HireNow",
    about = "Browse jobs and candidates and run AI candidate matching from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through every screen with scripted actions (default command)
    Demo(DemoArgs),
    /// List or post job openings
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// List candidates, optionally filtered by role or scoped to a job
    Candidates(CandidatesArgs),
    /// Match uploaded resumes against a job description
    Match(MatchArgs),
    /// Show headline recruiting numbers
    Dashboard(DashboardArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// List job postings, newest first
    List(JsonArgs),
    /// Post a new job opening
    Post(PostArgs),
}

#[derive(Args, Debug, Default)]
struct JsonArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    company: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    employment_type: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    /// Name of a job description file to attach instead of typed text
    #[arg(long)]
    attachment: Option<String>,
    /// Append the AI-enhanced paragraph before posting
    #[arg(long)]
    enhance: bool,
    #[command(flatten)]
    output: JsonArgs,
}

#[derive(Args, Debug, Default)]
struct CandidatesArgs {
    /// Job role to filter by ("all" shows everyone)
    #[arg(long)]
    role: Option<RoleFilter>,
    /// Show the candidates screen opened from a job posting
    #[arg(long, value_parser = parse_job_id)]
    from_job: Option<JobId>,
    #[command(flatten)]
    output: JsonArgs,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Job description label, e.g. "DevOps Engineer - CloudTech Solutions"
    #[arg(long)]
    jd: String,
    /// Resume file name; repeat for several resumes
    #[arg(long = "resume")]
    resumes: Vec<String>,
    #[command(flatten)]
    output: JsonArgs,
}

#[derive(Args, Debug, Default)]
struct DashboardArgs {
    /// Reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    #[command(flatten)]
    output: JsonArgs,
}

impl Command {
    fn json(&self) -> bool {
        match self {
            Command::Demo(_) => false,
            Command::Jobs {
                command: JobsCommand::List(output),
            } => output.json,
            Command::Jobs {
                command: JobsCommand::Post(args),
            } => args.output.json,
            Command::Candidates(args) => args.output.json,
            Command::Match(args) => args.output.json,
            Command::Dashboard(args) => args.output.json,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "hirenow shell starting");

    let shell = Shell::new(config, command.json());
    match command {
        Command::Demo(args) => run_demo(&shell, args).await,
        Command::Jobs {
            command: JobsCommand::List(output),
        } => list_jobs(&shell, output),
        Command::Jobs {
            command: JobsCommand::Post(args),
        } => post_job(&shell, args).await,
        Command::Candidates(args) => list_candidates(&shell, args),
        Command::Match(args) => run_match(&shell, args).await,
        Command::Dashboard(args) => show_dashboard(&shell, args),
    }
}

fn list_jobs(shell: &Shell, output: JsonArgs) -> Result<(), AppError> {
    let view_model = shell.view_model();
    if output.json {
        return render::print_json(view_model.jobs());
    }
    render::print_jobs(view_model.jobs());
    Ok(())
}

async fn post_job(shell: &Shell, args: PostArgs) -> Result<(), AppError> {
    let PostArgs {
        title,
        company,
        description,
        location,
        employment_type,
        salary,
        attachment,
        enhance,
        output,
    } = args;

    let mut editor = shell.editor();
    editor.edit(|draft| {
        *draft = JobDraft {
            title,
            company,
            location,
            employment_type,
            salary,
            description,
            attachment: None,
        };
    });
    if let Some(name) = attachment {
        editor.attach(UploadedFile::new(name));
    }
    if enhance {
        editor.enhance().map_err(RecruitingError::from)?;
        await_enhancement(&editor, shell.config.matching.enhance_delay).await;
    }

    let mut view_model = shell.view_model();
    let job = view_model.post_job(editor.draft())?;
    editor.clear();

    if output.json {
        return render::print_json(&job);
    }
    println!("{}", render::job_line(&job));
    Ok(())
}

fn list_candidates(shell: &Shell, args: CandidatesArgs) -> Result<(), AppError> {
    let mut view_model = shell.view_model();
    if let Some(role) = args.role {
        view_model.select_role(role)?;
    }
    let heading = match args.from_job {
        Some(id) => {
            let context = view_model.select_job(id)?;
            format!("Candidates for {}", context.job_title)
        }
        None => format!("Candidates ({})", view_model.role_filter()),
    };

    let candidates = view_model.filtered_candidates();
    if args.output.json {
        return render::print_json(&candidates);
    }
    render::print_candidates(&heading, &candidates);
    Ok(())
}

async fn run_match(shell: &Shell, args: MatchArgs) -> Result<(), AppError> {
    let mut view_model = shell.view_model();
    view_model.select_job_description(args.jd)?;
    view_model.attach_resumes(args.resumes.into_iter().map(UploadedFile::new));
    view_model.start_match()?;
    await_results(&view_model).await;

    let results = view_model.match_results();
    if args.output.json {
        return render::print_json(&results);
    }
    render::print_matches(&results);
    Ok(())
}

fn show_dashboard(shell: &Shell, args: DashboardArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let summary = shell.view_model().dashboard(today);
    if args.output.json {
        return render::print_json(&summary);
    }
    render::print_dashboard(&summary);
    Ok(())
}
