//! Folio - A scroll-driven portfolio for the terminal
//!
//! Renders a single-page portfolio with:
//! - A hero backdrop behind a shrinking diamond mask
//! - A navbar that hides on the way down and returns on the way up
//! - A project showcase that tracks the project in view
//! - Per-project detail pages

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use folio_core::{paths, Config, Project, ProjectCatalogue, Resolution, Route};

mod tui;

/// Folio - Terminal Portfolio
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A scroll-driven portfolio for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Open a project detail page instead of the landing page
    #[arg(short, long)]
    project: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Config file (defaults to ~/.folio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects in display order
    Projects,

    /// List available themes
    Themes,

    /// Print one project
    Show {
        /// Project name, as used in `/project/<name>`
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
    Json,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; stdout/stderr belong to the TUI
fn init_logging() -> Result<()> {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join("folio.log")) {
        Ok(file) => file,
        Err(_) => std::fs::File::create(null_device)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_project(project: &Project, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{} - {}", project.title, project.subtitle);
            println!();
            println!("{}", textwrap::fill(&project.overview, 80));
            println!();
            println!("Technologies: {}", project.technologies.join(", "));
            if let Some(url) = project.external_url() {
                println!("Link: {}", url);
            }
        }
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(project)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(project)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging()?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load(),
    };
    if let Some(theme) = &cli.theme {
        if !tui::THEME_REGISTRY.contains(theme) {
            tracing::warn!("Unknown theme '{}', using the default", theme);
        }
        config.theme = theme.clone();
    }
    let catalogue = config.catalogue();

    let theme = tui::THEME_REGISTRY.get_or_default(&config.theme);
    tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

    match cli.command {
        Some(Commands::Projects) => {
            println!("Projects ({}):", catalogue.len());
            for project in catalogue.projects() {
                println!("  {:<14} {} - {}", project.name, project.title, project.subtitle);
            }
        }
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Show { id, format }) => match catalogue.resolve(&id) {
            Resolution::Found(project) => print_project(project, format)?,
            Resolution::NotFound => {
                let known: Vec<&str> = catalogue.projects().iter().map(|p| p.name.as_str()).collect();
                bail!("project '{}' not found (known: {})", id, known.join(", "));
            }
        },
        None => {
            let route = match &cli.project {
                Some(id) => Route::Project(id.clone()),
                None => Route::Landing,
            };
            run_tui(config, catalogue, route).await?;
        }
    }

    Ok(())
}

async fn run_tui(config: Config, catalogue: ProjectCatalogue, route: Route) -> Result<()> {
    let mut app = tui::App::new(config, catalogue, route);
    app.run().await
}
