//! SynthFlow site core - terminal host
//!
//! Drives the same controller, content widgets and contact action the site
//! uses, rendering them to the terminal.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use synthflow::config::{SiteConfig, BASE_URL_ENV};
use synthflow::content::{Disclosure, ProjectModal, SkillAccordion};
use synthflow::error::{SiteError, SiteResult};
use synthflow::observability::init_default_logging;
use synthflow::page::footer_notice;
use synthflow::roadmap::markup::html_to_text;
use synthflow::roadmap::{GenerateOutcome, Navigator, RoadmapRequestController, RoadmapView};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "synthflow")]
#[command(about = "SynthFlow site core: roadmap demo, contact drafts and site content")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a three-step automation roadmap
    Roadmap {
        /// Business or industry (more than 3 characters)
        #[arg(long)]
        business: String,
        /// Key problem to solve (more than 10 characters)
        #[arg(long)]
        problem: String,
        /// Print the contact draft link after a successful roadmap
        #[arg(long)]
        contact: bool,
    },
    /// Show a project case study
    Project {
        /// Project id (faq, data-sync, inventory)
        id: String,
    },
    /// Toggle skill details in order, as clicks on the skill cards would
    Skill {
        /// Skill ids (prompt-engineering, vibe-code, full-stack)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Roadmap view printing to stdout
#[derive(Default)]
struct TerminalView {
    rendered: usize,
}

impl RoadmapView for TerminalView {
    fn set_generate_enabled(&mut self, enabled: bool) {
        debug!(enabled, "Generate action toggled");
    }

    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            println!("Generating your roadmap...");
        }
    }

    fn set_result_visible(&mut self, visible: bool) {
        if visible {
            println!();
        }
    }

    fn set_error_visible(&mut self, visible: bool) {
        debug!(visible, "Error region toggled");
    }

    fn clear_steps(&mut self) {
        self.rendered = 0;
    }

    fn append_step(&mut self, html: &str) {
        self.rendered += 1;
        println!("  {}. {}", self.rendered, html_to_text(html));
    }

    fn replace_steps_with_message(&mut self, message: &str) {
        self.rendered = 0;
        println!("  {message}");
    }

    fn scroll_contact_into_view(&mut self) {
        println!("Ready to build this? Re-run with --contact to draft an email.");
    }
}

/// Navigator that prints the link for the user to open
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, url: &str) {
        println!("\nOpen this link to email the roadmap:\n{url}");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();
    debug!("synthflow v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Roadmap {
            business,
            problem,
            contact,
        } => match load_configuration(&cli.config) {
            Ok(config) => run_roadmap(config, &business, &problem, contact).await,
            Err(e) => Err(e),
        },
        Commands::Project { id } => show_project(&id),
        Commands::Skill { ids } => toggle_skills(&ids),
        Commands::Config { show } => {
            load_configuration(&cli.config).and_then(|config| handle_config_command(config, show))
        }
    };

    if let Err(e) = result {
        error!(kind = e.kind(), "Command failed: {}", e);
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn load_configuration(config_path: &Option<PathBuf>) -> SiteResult<SiteConfig> {
    if let Some(path) = config_path {
        info!("Loading configuration from: {}", path.display());
        return Ok(SiteConfig::load_from_file(path)?);
    }

    for path_str in ["synthflow.toml", "config/synthflow.toml"] {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading configuration from: {}", path.display());
            return Ok(SiteConfig::load_from_file(&path)?);
        }
    }

    match std::env::var(BASE_URL_ENV) {
        Ok(base_url) => {
            info!("No configuration file found, using {}", BASE_URL_ENV);
            Ok(SiteConfig::from_base_url(&base_url)?)
        }
        Err(_) => Err(SiteError::invalid_input(format!(
            "No configuration file found. Provide one with -c/--config, create synthflow.toml, or set {BASE_URL_ENV}"
        ))),
    }
}

async fn run_roadmap(
    config: SiteConfig,
    business: &str,
    problem: &str,
    contact: bool,
) -> SiteResult<()> {
    let mut controller = RoadmapRequestController::from_config(&config, TerminalView::default())?;

    if !controller.on_input(business, problem) {
        return Err(SiteError::invalid_input(
            "business must be longer than 3 characters and problem longer than 10",
        ));
    }

    match controller.generate(business, problem).await {
        GenerateOutcome::Generated(_) => {
            if contact {
                controller.contact(&config.contact, &mut TerminalNavigator);
            }
            println!("\n{}", footer_notice());
            Ok(())
        }
        GenerateOutcome::Failed(e) => Err(e.into()),
        GenerateOutcome::Skipped => Err(SiteError::invalid_input("roadmap request was skipped")),
    }
}

fn show_project(id: &str) -> SiteResult<()> {
    let mut modal = ProjectModal::new();
    let entry = modal.show(id)?;
    println!("{}\n", entry.title);
    println!("{}", html_to_text(entry.content));
    modal.close();
    Ok(())
}

fn toggle_skills(ids: &[String]) -> SiteResult<()> {
    let mut accordion = SkillAccordion::new();
    for id in ids {
        match accordion.toggle(id)? {
            Disclosure::Opened(entry) => {
                println!("[open] {}\n{}\n", entry.title, html_to_text(entry.content));
            }
            Disclosure::Closed => println!("[closed] {id}\n"),
        }
    }

    let open = accordion.open_id().unwrap_or("none");
    println!("Open skill: {open}");
    Ok(())
}

fn handle_config_command(config: SiteConfig, show: bool) -> SiteResult<()> {
    if show {
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| SiteError::invalid_input(format!("cannot render configuration: {e}")))?;
        println!("Current configuration:");
        println!("{rendered}");
    }

    println!("Configuration valid: roadmap requests go to {}", config.roadmap_url());
    Ok(())
}
