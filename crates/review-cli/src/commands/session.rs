use crate::commands::prompts::{prompt_rating, prompt_recommendation, prompt_select, prompt_validated};
use crate::output::Output;
use color_eyre::Result;
use review_config::Config;
use review_core::validation::{validate_author, validate_description, validate_email, validate_title};
use review_core::{CommandError, ReviewWidget};
use review_models::{ReviewForm, SortMode};
use std::io::IsTerminal;

const MENU: [&str; 5] = [
    "Write a review",
    "Mark a review as helpful",
    "Change sort order",
    "Show reviews",
    "Quit",
];

const SORT_CHOICES: [(SortMode, &str); 3] = [
    (SortMode::Newest, "Newest first"),
    (SortMode::Highest, "Highest rated"),
    (SortMode::Submitted, "Submission order"),
];

/// Interactive review session. Reviews live only as long as the process.
pub fn run_session(config: &Config, sort: Option<SortMode>, output: &Output) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(color_eyre::eyre::eyre!(
            "The interactive session needs a terminal. Use 'reviews replay <FILE>' for scripted input."
        ));
    }

    let mut widget = ReviewWidget::new(config.display.clone());
    if let Some(mode) = sort {
        widget.set_sort_mode(mode);
    }
    tracing::info!(operation = "session_start", sort_mode = %widget.sort_mode(), "Review session started");

    output.view(&widget.view(), widget.display());

    let menu: Vec<String> = MENU.iter().map(|item| item.to_string()).collect();
    loop {
        match prompt_select("What would you like to do?", &menu, 0)? {
            0 => write_review(&mut widget, output)?,
            1 => mark_helpful(&mut widget, output)?,
            2 => change_sort(&mut widget)?,
            3 => {}
            _ => break,
        }
        output.view(&widget.view(), widget.display());
    }

    output.info(format!(
        "Session ended with {} review(s). Nothing was saved.",
        widget.store().len()
    ));
    Ok(())
}

fn write_review(widget: &mut ReviewWidget, output: &Output) -> Result<()> {
    let display = widget.display().clone();
    let form = ReviewForm {
        author: prompt_validated("Your name", false, validate_author)?,
        email: prompt_validated("Email (optional)", true, validate_email)?,
        title: prompt_validated("Review title", false, validate_title)?,
        description: prompt_validated("Your review", false, validate_description)?,
        rating: Some(f64::from(prompt_rating(&display.filled_glyph, &display.empty_glyph)?)),
        recommends: prompt_recommendation()?,
    };

    match widget.submit_form(&form) {
        Ok(id) => output.success(format!("Thanks! Review #{} was added.", id)),
        Err(CommandError::Invalid(errors)) => {
            for error in errors.errors() {
                output.error(format!("{}: {}", error.field(), error));
            }
        }
    }
    Ok(())
}

fn mark_helpful(widget: &mut ReviewWidget, output: &Output) -> Result<()> {
    let view = widget.view();
    if view.is_empty() {
        output.warn("There are no reviews to vote on yet");
        return Ok(());
    }

    let items: Vec<String> = view
        .reviews
        .iter()
        .map(|review| {
            let marker = if review.helpful.voted { " (voted)" } else { "" };
            format!("#{} {} by {} ({} helpful){}", review.id, review.title, review.author, review.helpful.count, marker)
        })
        .collect();
    let index = prompt_select("Which review was helpful?", &items, 0)?;
    let id = view.reviews[index].id;

    if widget.vote_helpful(id) {
        output.success(format!("Marked review #{} as helpful", id));
    } else {
        output.info(format!("You already marked review #{} as helpful", id));
    }
    Ok(())
}

fn change_sort(widget: &mut ReviewWidget) -> Result<()> {
    let items: Vec<String> = SORT_CHOICES.iter().map(|(_, label)| label.to_string()).collect();
    let current = SORT_CHOICES
        .iter()
        .position(|(mode, _)| *mode == widget.sort_mode())
        .unwrap_or(0);
    let index = prompt_select("Sort reviews by", &items, current)?;
    widget.set_sort_mode(SORT_CHOICES[index].0);
    Ok(())
}
