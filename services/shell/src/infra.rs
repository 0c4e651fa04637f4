use chrono::NaiveDate;
use hirenow::config::AppConfig;
use hirenow::workflows::recruiting::{
    DelayScheduler, JobDraftEditor, JobId, MatchState, Notification, Notifier, RecruitingViewModel,
    TokioScheduler, TracingNotifier,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::warn;

const ENHANCE_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Prints notifications as `[title] description` lines.
///
/// With JSON output enabled the lines go to stderr so stdout stays machine-readable.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleNotifier {
    to_stderr: bool,
}

impl ConsoleNotifier {
    pub(crate) fn new(json: bool) -> Self {
        Self { to_stderr: json }
    }
}

pub(crate) fn notification_line(notification: &Notification) -> String {
    format!("[{}] {}", notification.title, notification.description)
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = notification_line(&notification);
        TracingNotifier.notify(notification);

        // Closed pipes are ignored.
        let _ = if self.to_stderr {
            writeln!(std::io::stderr(), "{line}")
        } else {
            writeln!(std::io::stdout(), "{line}")
        };
    }
}

/// Runtime-backed collaborators shared by every subcommand.
pub(crate) struct Shell {
    pub(crate) config: AppConfig,
    scheduler: Arc<dyn DelayScheduler>,
    notifier: Arc<dyn Notifier>,
}

impl Shell {
    pub(crate) fn new(config: AppConfig, json: bool) -> Self {
        Self {
            config,
            scheduler: Arc::new(TokioScheduler::new(Handle::current())),
            notifier: Arc::new(ConsoleNotifier::new(json)),
        }
    }

    pub(crate) fn view_model(&self) -> RecruitingViewModel {
        RecruitingViewModel::seeded(
            self.scheduler.clone(),
            self.notifier.clone(),
            &self.config.matching,
        )
    }

    pub(crate) fn editor(&self) -> JobDraftEditor {
        JobDraftEditor::new(
            self.scheduler.clone(),
            self.notifier.clone(),
            self.config.matching.enhance_delay,
        )
    }
}

/// Wait for a started match to deliver results.
pub(crate) async fn await_results(view_model: &RecruitingViewModel) {
    let mut receiver = view_model.subscribe_match_state();
    if receiver
        .wait_for(|state| *state == MatchState::Results)
        .await
        .is_err()
    {
        warn!("match session closed before results arrived");
    }
}

/// Wait for a pending description enhancement to land.
pub(crate) async fn await_enhancement(editor: &JobDraftEditor, delay: Duration) {
    tokio::time::sleep(delay).await;
    while editor.is_enhancing() {
        tokio::time::sleep(ENHANCE_POLL_INTERVAL).await;
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_job_id(raw: &str) -> Result<JobId, String> {
    raw.trim()
        .parse::<u32>()
        .map(JobId)
        .map_err(|err| format!("failed to parse '{raw}' as a job id ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_lines_use_bracketed_title() {
        let line = notification_line(&Notification::info("Filter Applied", "Showing candidates for all"));
        assert_eq!(line, "[Filter Applied] Showing candidates for all");
    }

    #[test]
    fn parses_dates_and_job_ids() {
        assert_eq!(
            parse_date(" 2026-10-17 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date"))
        );
        assert!(parse_date("17/10/2026").is_err());
        assert_eq!(parse_job_id("4"), Ok(JobId(4)));
        assert!(parse_job_id("four").is_err());
    }
}
