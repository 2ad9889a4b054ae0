use chrono::{DateTime, Utc};
use review_config::DisplayConfig;
use review_models::{Review, ReviewForm, ReviewId, SortMode, SubmittedReviewInput};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::pipeline::{build_view, WidgetView};
use crate::store::ReviewStore;
use crate::validation::{validate, ValidationErrors};

/// Source of creation timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One user action, as emitted by a presentation layer or a replay script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WidgetCommand {
    Submit(ReviewForm),
    VoteHelpful { id: ReviewId },
    SetSortMode { mode: SortMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Submitted(ReviewId),
    Voted { id: ReviewId, applied: bool },
    SortChanged(SortMode),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("review rejected: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// A review session: owns the store and the current sort mode.
pub struct ReviewWidget {
    store: ReviewStore,
    sort_mode: SortMode,
    display: DisplayConfig,
    clock: Box<dyn Clock>,
}

impl ReviewWidget {
    pub fn new(display: DisplayConfig) -> Self {
        Self::with_clock(display, Box::new(SystemClock))
    }

    pub fn with_clock(display: DisplayConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            store: ReviewStore::new(),
            sort_mode: display.default_sort,
            display,
            clock,
        }
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Store an already validated review and return its id
    pub fn submit_review(&mut self, input: SubmittedReviewInput) -> ReviewId {
        let id = self.store.next_id();
        let review = Review::new(id, input, self.clock.now());
        info!(
            operation = "submit_review",
            review_id = %id,
            rating = review.rating.stars(),
            "Review submitted"
        );
        self.store.add(review);
        id
    }

    /// Validate a raw form and store it when every field passes
    pub fn submit_form(&mut self, form: &ReviewForm) -> Result<ReviewId, CommandError> {
        let input = validate(form)?;
        Ok(self.submit_review(input))
    }

    pub fn vote_helpful(&mut self, id: ReviewId) -> bool {
        let applied = self.store.mark_helpful(id);
        info!(operation = "vote_helpful", review_id = %id, applied, "Helpful vote handled");
        applied
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    pub fn view(&self) -> WidgetView {
        build_view(&self.store, self.sort_mode, &self.display)
    }

    pub fn apply(&mut self, command: WidgetCommand) -> Result<CommandOutcome, CommandError> {
        match command {
            WidgetCommand::Submit(form) => self.submit_form(&form).map(CommandOutcome::Submitted),
            WidgetCommand::VoteHelpful { id } => Ok(CommandOutcome::Voted {
                id,
                applied: self.vote_helpful(id),
            }),
            WidgetCommand::SetSortMode { mode } => {
                self.set_sort_mode(mode);
                Ok(CommandOutcome::SortChanged(mode))
            }
        }
    }
}
