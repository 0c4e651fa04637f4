use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use super::domain::{JobDraft, UploadedFile};
use super::errors::PreconditionError;
use super::notifications::{Notification, Notifier};
use super::scheduler::{DelayScheduler, ScheduledTask};

pub const ENHANCED_DESCRIPTION: &str = "\n\nEnhanced Description: We are seeking a talented professional with a passion for innovation and problem-solving. The ideal candidate should possess strong communication skills, attention to detail, and the ability to work effectively in a team environment. Experience with modern technologies and methodologies is highly desired. Must be able to adapt to a fast-paced work environment and deliver high-quality results under tight deadlines.";

#[derive(Default)]
struct EditorState {
    draft: JobDraft,
    enhancing: bool,
    generation: u64,
}

/// Post-job form state, including the simulated "enhance with AI" step.
pub struct JobDraftEditor {
    state: Arc<Mutex<EditorState>>,
    scheduler: Arc<dyn DelayScheduler>,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl JobDraftEditor {
    pub fn new(
        scheduler: Arc<dyn DelayScheduler>,
        notifier: Arc<dyn Notifier>,
        delay: Duration,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(EditorState::default())),
            scheduler,
            notifier,
            delay,
            pending: None,
        }
    }

    pub fn draft(&self) -> JobDraft {
        self.lock().draft.clone()
    }

    pub fn is_enhancing(&self) -> bool {
        self.lock().enhancing
    }

    pub fn edit<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut JobDraft),
    {
        apply(&mut self.lock().draft);
    }

    /// Attach a job description file in place of (or alongside) typed text.
    pub fn attach(&mut self, file: UploadedFile) {
        let name = file.name.clone();
        self.lock().draft.attachment = Some(file);
        self.notifier.notify(Notification::info(
            "File Uploaded",
            format!("{name} has been uploaded"),
        ));
    }

    /// Append the canned enhancement paragraph after the configured delay.
    pub fn enhance(&mut self) -> Result<(), PreconditionError> {
        let generation = {
            let mut state = self.lock();
            if state.enhancing {
                return Err(PreconditionError::EnhanceInProgress);
            }
            state.enhancing = true;
            state.generation += 1;
            state.generation
        };

        info!(delay_ms = self.delay.as_millis() as u64, "enhancing job description");
        let weak = Arc::downgrade(&self.state);
        let notifier = self.notifier.clone();
        let task = Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            {
                let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
                if state.generation != generation || !state.enhancing {
                    debug!(generation, "discarding stale enhancement");
                    return;
                }
                state.draft.description.push_str(ENHANCED_DESCRIPTION);
                state.enhancing = false;
            }
            notifier.notify(Notification::info(
                "JD Enhanced",
                "Job description has been enhanced with AI",
            ));
        });
        self.pending = Some(self.scheduler.schedule(self.delay, task));
        Ok(())
    }

    /// Reset the form, cancelling a pending enhancement.
    pub fn clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        let mut state = self.lock();
        state.generation += 1;
        state.enhancing = false;
        state.draft = JobDraft::default();
    }

    fn lock(&self) -> MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
