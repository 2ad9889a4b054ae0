use color_eyre::Result;
use dialoguer::{Confirm, Input, Select};
use review_core::FieldError;

/// Prompt for text, re-asking until `check` accepts it
pub fn prompt_validated<F>(prompt: &str, allow_empty: bool, check: F) -> Result<String>
where
    F: Fn(&str) -> std::result::Result<(), FieldError>,
{
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .validate_with(|input: &String| check(input).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for one of `items`, returning its index
pub fn prompt_select(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}

/// Prompt for a star rating between 1 and 5
pub fn prompt_rating(filled: &str, empty: &str) -> Result<u8> {
    let items: Vec<String> = (1..=5u8)
        .map(|stars| format!("{}{}", filled.repeat(stars as usize), empty.repeat(5 - stars as usize)))
        .collect();
    let index = prompt_select("Rating", &items, 4)?;
    Ok(index as u8 + 1)
}

/// Tri-state recommendation: yes, no, or skip
pub fn prompt_recommendation() -> Result<Option<bool>> {
    let items = vec![
        "Yes, I recommend it".to_string(),
        "No, I don't recommend it".to_string(),
        "Skip".to_string(),
    ];
    let choice = match prompt_select("Would you recommend this product?", &items, 2)? {
        0 => Some(true),
        1 => Some(false),
        _ => None,
    };
    Ok(choice)
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}
