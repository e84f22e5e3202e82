pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use plalz_core::catalog::PricingCatalog;
use plalz_core::config::{AppConfig, LoadOptions};
use plalz_core::domain::form::{
    ContactInfo, DesignPreferences, DesignType, FeatureId, Industry, IntegrationId, ProjectType,
    QuoteFormPatch, Timeline, TimelinePriority,
};
use plalz_core::domain::quote::QuoteStatus;
use plalz_core::store::QuoteStoreHandle;
use plalz_storage::FileSnapshotStore;

#[derive(Debug, Parser)]
#[command(
    name = "plalz",
    about = "Plalz quote engine CLI",
    long_about = "Walk the quote wizard, manage saved quotes, and inspect pricing from the terminal.",
    after_help = "Examples:\n  plalz estimate --project-type website --feature newsletter --design custom\n  plalz draft update --step 2 --project-type ecommerce --industry retail\n  plalz quote save\n  plalz quote set-status <id> in-review"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Config file (defaults to plalz.toml, then config/plalz.toml)"
    )]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price a one-off form without touching the draft")]
    Estimate {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(subcommand, about = "Work with the in-progress draft")]
    Draft(DraftCommand),
    #[command(subcommand, about = "Manage saved quotes")]
    Quote(QuoteCommand),
    #[command(about = "Inspect effective configuration values")]
    Config,
}

#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    #[command(about = "Show the in-progress draft and its estimate")]
    Show {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Merge one wizard step into the draft and reprice it")]
    Update {
        #[arg(long, help = "Wizard step the update belongs to (defaults to the current step)")]
        step: Option<u32>,
        #[command(flatten)]
        form: FormArgs,
    },
    #[command(about = "Move the wizard step cursor")]
    Step { step: u32 },
    #[command(about = "Reset the draft, step cursor, and estimate")]
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum QuoteCommand {
    #[command(about = "Snapshot the draft into a new saved quote")]
    Save,
    #[command(about = "List saved quotes")]
    List {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show one saved quote in full")]
    Show { id: String },
    #[command(about = "Submit a saved quote for review")]
    Submit { id: String },
    #[command(about = "Copy a saved quote back into the draft")]
    Load { id: String },
    #[command(about = "Delete a saved quote permanently")]
    Delete { id: String },
    #[command(about = "Set a quote's lifecycle status directly")]
    SetStatus { id: String, status: QuoteStatus },
}

#[derive(Debug, Default, Args)]
pub struct FormArgs {
    #[arg(long, help = "website|ecommerce|webapp|mobile|landing|redesign")]
    pub project_type: Option<ProjectType>,
    #[arg(
        long,
        help = "technology|healthcare|finance|education|retail|hospitality|real-estate|fitness|creative|nonprofit"
    )]
    pub industry: Option<Industry>,
    #[arg(long = "feature", value_name = "ID", help = "Feature id; repeatable")]
    pub features: Vec<String>,
    #[arg(long = "integration", value_name = "ID", help = "Integration id; repeatable")]
    pub integrations: Vec<String>,
    #[arg(long, help = "template|custom|hybrid")]
    pub design: Option<DesignType>,
    #[arg(long, help = "Free-form design notes")]
    pub design_notes: Option<String>,
    #[arg(long, help = "low|medium|high|urgent")]
    pub priority: Option<TimelinePriority>,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Desired launch date")]
    pub deadline: Option<NaiveDate>,
    #[arg(long, help = "Budget range, free-form")]
    pub budget: Option<String>,
    #[arg(long, help = "Contact name")]
    pub contact_name: Option<String>,
    #[arg(long, help = "Contact email")]
    pub contact_email: Option<String>,
}

impl FormArgs {
    pub fn into_patch(self) -> QuoteFormPatch {
        let FormArgs {
            project_type,
            industry,
            features,
            integrations,
            design,
            design_notes,
            priority,
            deadline,
            budget,
            contact_name,
            contact_email,
        } = self;

        let design_preferences = (design.is_some() || design_notes.is_some())
            .then(|| DesignPreferences { design_type: design, notes: design_notes });
        let timeline =
            (priority.is_some() || deadline.is_some()).then(|| Timeline { priority, deadline });
        let contact_info = (contact_name.is_some() || contact_email.is_some()).then(|| {
            ContactInfo {
                name: contact_name.unwrap_or_default(),
                email: contact_email.unwrap_or_default(),
                phone: None,
                company: None,
            }
        });

        QuoteFormPatch {
            project_type,
            industry,
            selected_features: (!features.is_empty())
                .then(|| features.into_iter().map(FeatureId).collect()),
            selected_integrations: (!integrations.is_empty())
                .then(|| integrations.into_iter().map(IntegrationId).collect()),
            design_preferences,
            timeline,
            contact_info,
            budget,
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<String> {
    let require_file = cli.config.is_some();
    let config = AppConfig::load(LoadOptions {
        config_path: cli.config,
        require_file,
        ..LoadOptions::default()
    })?;
    init_logging(&config);

    let catalog = match &config.catalog.path {
        Some(path) => PricingCatalog::load(path)?,
        None => PricingCatalog::builtin(),
    };

    match cli.command {
        Command::Estimate { form, json } => commands::estimate::run(&catalog, form, json),
        Command::Config => Ok(commands::config::run(&config)),
        Command::Draft(command) => commands::draft::run(&mut open_store(&config, catalog), command),
        Command::Quote(command) => commands::quote::run(&mut open_store(&config, catalog), command),
    }
}

fn open_store(config: &AppConfig, catalog: PricingCatalog) -> QuoteStoreHandle<FileSnapshotStore> {
    let storage = FileSnapshotStore::new(&config.storage.path);
    let mut handle = QuoteStoreHandle::new(catalog, storage);
    handle.hydrate();
    handle
}

fn init_logging(config: &AppConfig) {
    use plalz_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
