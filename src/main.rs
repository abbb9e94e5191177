// Day Tint
// Command line driver for managing color rules and previewing a month

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use day_tint::config::AppConfig;
use day_tint::services::annotator::{
    annotate_once, Annotator, AnnotatorConfig, FixedTheme, MemoryHost, SystemTheme, ThemeSignal,
};
use day_tint::services::settings::{JsonFileStore, SettingsSession};

#[derive(Parser)]
#[command(name = "day-tint", version, about = "Color calendar days from weekday rules and .ics files")]
struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the settings document (overrides config)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import one or more .ics files as calendars
    Import { files: Vec<PathBuf> },
    /// List loaded calendars and color rules
    List,
    /// Remove a loaded calendar by its list index
    Remove { index: usize },
    /// Set a weekday color, or clear it when no color is given
    DayColor { weekday: String, color: Option<String> },
    /// Set a calendar override color, or clear it when no color is given
    CalendarColor { title: String, color: Option<String> },
    /// Show the colors a month's day cells would get
    Preview {
        year: i32,
        month: u32,
        /// Force the dark theme opacity instead of asking the system
        #[arg(long)]
        dark: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let settings_path = match cli.settings {
        Some(path) => path,
        None => config.resolve_settings_path()?,
    };
    let store = JsonFileStore::new(settings_path);
    log::debug!("Using settings at {:?}", store.path());

    match cli.command {
        Command::Import { files } => {
            let mut session = SettingsSession::load(&store).await?;
            for path in &files {
                let index = session.import_file(path).await?;
                let calendar = &session.calendars()[index];
                println!(
                    "[{}] {} ({} events)",
                    index,
                    display_title(&calendar.title),
                    calendar.events.len()
                );
            }
            session.save(&store).await?;
        }
        Command::List => {
            let session = SettingsSession::load(&store).await?;
            print_session(&session);
        }
        Command::Remove { index } => {
            let mut session = SettingsSession::load(&store).await?;
            let removed = session.remove_calendar(index)?;
            session.save(&store).await?;
            println!("Removed {}", display_title(&removed.title));
        }
        Command::DayColor { weekday, color } => {
            let mut session = SettingsSession::load(&store).await?;
            session.set_day_color(&weekday, color)?;
            session.save(&store).await?;
        }
        Command::CalendarColor { title, color } => {
            let mut session = SettingsSession::load(&store).await?;
            session.set_calendar_color(&title, color);
            session.save(&store).await?;
        }
        Command::Preview { year, month, dark } => {
            if dark {
                preview(&store, config.annotator, FixedTheme(true), year, month).await?;
            } else {
                preview(&store, config.annotator, SystemTheme, year, month).await?;
            }
        }
    }

    Ok(())
}

async fn preview<T: ThemeSignal>(
    store: &JsonFileStore,
    config: AnnotatorConfig,
    theme: T,
    year: i32,
    month: u32,
) -> Result<()> {
    let mut host = MemoryHost::month(year, month, &config.day_key_attribute);
    if host.cells().is_empty() {
        anyhow::bail!("No days to preview for {}-{}", year, month);
    }

    let annotator = Annotator::new(config, theme);
    let stats = annotate_once(store, &mut host, &annotator)
        .await
        .context("Failed to read settings for preview")?;

    for cell in host.cells() {
        let date = annotator.cell_date(cell).unwrap_or_default();
        let style = cell.inline_style();
        if style.is_empty() {
            println!("{:<10}  -", date);
        } else {
            println!("{:<10}  {}", date, style);
        }
    }
    println!("{} of {} days colored", stats.colored, host.cells().len());
    Ok(())
}

fn print_session(session: &SettingsSession) {
    println!("Calendars:");
    if session.calendars().is_empty() {
        println!("  (none)");
    }
    for (index, calendar) in session.calendars().iter().enumerate() {
        let color = session
            .calendar_colors()
            .get(&calendar.title)
            .map(String::as_str)
            .unwrap_or("-");
        println!(
            "  [{}] {} ({} events) {}",
            index,
            display_title(&calendar.title),
            calendar.events.len(),
            color
        );
    }

    println!("Day colors:");
    if session.day_colors().is_empty() {
        println!("  (none)");
    }
    for (weekday, color) in session.day_colors() {
        println!("  {:<9} {}", weekday, color);
    }
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        "(untitled)"
    } else {
        title
    }
}
