use crate::commands::prompts::prompt_yes_no;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use review_config::Config;
use serde_json::json;
use std::path::Path;

pub fn run_config(cmd: crate::ConfigCommands, config_file: &Path, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(config_file, output),
        crate::ConfigCommands::Init { force } => init_config(config_file, force, output),
        crate::ConfigCommands::Path => {
            match output.format() {
                OutputFormat::Human => println!("{}", config_file.display()),
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.json(&json!({ "config_file": config_file.display().to_string() }))
                }
            }
            Ok(())
        }
    }
}

fn show_config(config_file: &Path, output: &Output) -> Result<()> {
    let exists = config_file.exists();
    let config = Config::load_or_default(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            if !exists {
                output.warn(format!(
                    "Configuration file not found at {}; showing defaults. Run 'reviews config init' to create it.",
                    config_file.display()
                ));
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
                Cell::new(config_file.display().to_string()).add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("display.default_sort"), Cell::new(config.display.default_sort)]);
            table.add_row(vec![Cell::new("display.date_format"), Cell::new(&config.display.date_format)]);
            table.add_row(vec![Cell::new("display.filled_glyph"), Cell::new(&config.display.filled_glyph)]);
            table.add_row(vec![Cell::new("display.empty_glyph"), Cell::new(&config.display.empty_glyph)]);
            table.add_row(vec![Cell::new("logging.level"), Cell::new(&config.logging.level)]);
            table.add_row(vec![
                Cell::new("logging.json"),
                Cell::new(
                    config
                        .logging
                        .json
                        .map(|json| json.to_string())
                        .unwrap_or_else(|| "(auto: when not a terminal)".to_string()),
                ),
            ]);
            table.add_row(vec![
                Cell::new("logging.file"),
                Cell::new(
                    config
                        .logging
                        .file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(stderr)".to_string()),
                ),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "exists": exists,
                "display": {
                    "default_sort": config.display.default_sort.as_str(),
                    "date_format": config.display.date_format,
                    "filled_glyph": config.display.filled_glyph,
                    "empty_glyph": config.display.empty_glyph,
                },
                "logging": {
                    "level": config.logging.level,
                    "json": config.logging.json,
                    "file": config.logging.file.as_ref().map(|p| p.display().to_string()),
                }
            }));
        }
    }

    Ok(())
}

fn init_config(config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        let overwrite = output.format() == OutputFormat::Human
            && prompt_yes_no(
                &format!("{} already exists. Overwrite with defaults?", config_file.display()),
                Some(false),
            )?;
        if !overwrite {
            output.info("Keeping existing configuration");
            return Ok(());
        }
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
