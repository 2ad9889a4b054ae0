use clap::ValueEnum;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use review_config::DisplayConfig;
use review_core::{RenderedReview, ReviewStatistics, WidgetView};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "success",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors should always be shown, even in quiet mode
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "✗".red(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "error",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "info",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "⚠".yellow(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "warning",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }

    /// Draw the statistics header and one table row per review card
    pub fn view(&self, view: &WidgetView, display: &DisplayConfig) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                println!("{}", statistics_line(&view.statistics, display));
                if view.is_empty() {
                    println!("{}", "No reviews yet. Be the first to write one!".dimmed());
                    return;
                }
                println!("{}", reviews_table(view, display));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => match serde_json::to_value(view) {
                Ok(value) => self.json(&value),
                Err(e) => self.error(format!("Failed to serialize view: {}", e)),
            },
        }
    }
}

fn statistics_line(stats: &ReviewStatistics, display: &DisplayConfig) -> String {
    let stars = stats.stars.to_glyphs(&display.filled_glyph, &display.empty_glyph);
    format!(
        "{} {} {} · {} reviews · {}% recommend",
        format!("{:.1}", stats.average_rating).bold(),
        stars.yellow(),
        "average".dimmed(),
        stats.count,
        stats.recommend_percentage
    )
}

fn helpful_cell(review: &RenderedReview) -> Cell {
    let label = format!("👍 {}", review.helpful.count);
    if review.helpful.voted {
        Cell::new(format!("{} (voted)", label)).fg(Color::Green)
    } else {
        Cell::new(label)
    }
}

fn reviews_table(view: &WidgetView, display: &DisplayConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new(format!("Reviews (sorted: {})", view.sort_mode))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Helpful").add_attribute(Attribute::Bold),
    ]);

    for review in &view.reviews {
        let mut body = format!("{}\n{} · {}", review.title, review.author, review.date);
        if let Some(label) = review.recommendation {
            body.push_str(&format!(" · {}", label));
        }
        body.push('\n');
        body.push_str(&review.description);

        table.add_row(vec![
            Cell::new(review.id),
            Cell::new(body),
            Cell::new(review.rating.to_glyphs(&display.filled_glyph, &display.empty_glyph)).fg(Color::Yellow),
            helpful_cell(review),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
