use crate::output::Output;
use color_eyre::eyre::Context;
use color_eyre::Result;
use review_config::Config;
use review_core::{CommandError, CommandOutcome, ReviewWidget, WidgetCommand};
use review_models::SortMode;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    /// Helpful votes for unknown ids or already-voted reviews
    pub ignored_votes: usize,
    pub rejected: usize,
}

pub fn load_commands(path: &Path) -> Result<Vec<WidgetCommand>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read commands from {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse commands in {}", path.display()))
}

/// Apply commands in order. Rejected submissions are reported and skipped.
pub fn replay_commands(widget: &mut ReviewWidget, commands: Vec<WidgetCommand>, output: &Output) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for (index, command) in commands.into_iter().enumerate() {
        match widget.apply(command) {
            Ok(CommandOutcome::Voted { id, applied: false }) => {
                summary.ignored_votes += 1;
                tracing::debug!(operation = "replay", step = index + 1, %id, "Helpful vote ignored");
                output.warn(format!("Step {}: helpful vote for review #{} had no effect", index + 1, id));
            }
            Ok(outcome) => {
                summary.applied += 1;
                tracing::debug!(operation = "replay", step = index + 1, outcome = ?outcome, "Command applied");
            }
            Err(CommandError::Invalid(errors)) => {
                summary.rejected += 1;
                for error in errors.errors() {
                    output.warn(format!("Step {}: {}: {}", index + 1, error.field(), error));
                }
            }
        }
    }

    summary
}

pub fn run_replay(config: &Config, file: &Path, sort: Option<SortMode>, output: &Output) -> Result<()> {
    let commands = load_commands(file)?;
    tracing::info!(operation = "replay", file = %file.display(), commands = commands.len(), "Replaying commands");

    let mut widget = ReviewWidget::new(config.display.clone());
    if let Some(mode) = sort {
        widget.set_sort_mode(mode);
    }

    let summary = replay_commands(&mut widget, commands, output);
    tracing::info!(
        operation = "replay",
        applied = summary.applied,
        ignored_votes = summary.ignored_votes,
        rejected = summary.rejected,
        "Replay finished"
    );
    if summary.rejected > 0 {
        output.warn(format!("{} submission(s) rejected", summary.rejected));
    }
    if summary.ignored_votes > 0 {
        output.warn(format!("{} helpful vote(s) ignored", summary.ignored_votes));
    }

    output.view(&widget.view(), widget.display());
    Ok(())
}
