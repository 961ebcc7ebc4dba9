// Sample data fixtures use wide tuple types.
#![allow(clippy::type_complexity)]

pub mod catalog;
pub mod commands;
pub mod entity;
pub mod error;
pub mod queries;
pub mod sample_data;
pub mod services;
pub mod state;
pub mod types;
pub mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use error::CommandError;
use services::calendar::{CalendarMode, CalendarView};
use services::documents::{DocumentTab, DocumentsView};
use services::projects::{ProjectTab, ProjectsView};
use services::settings::SettingsTab;
use services::ViewMode;
use state::LoadOptions;

#[derive(Parser)]
#[command(name = "projectdesk")]
#[command(about = "Project, calendar and document views for a renovation business, as JSON")]
struct Cli {
    /// Config file (defaults to ~/.projectdesk/config.json)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON to load instead of the configured one
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    /// Pin "today" to this date
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Metrics, trend, recent projects, activity and deadlines
    Dashboard,
    /// Project cards with status tabs
    Projects {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = ProjectTab::All)]
        tab: ProjectTab,
    },
    /// Schedule of one day, upcoming events and month markers
    Calendar {
        /// Day to show (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        day: Option<NaiveDate>,
        #[arg(long, default_value_t = CalendarMode::Schedule)]
        view: CalendarMode,
    },
    /// Documents with All/Recent/Shared tabs
    Documents {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = DocumentTab::All)]
        tab: DocumentTab,
        #[arg(long, default_value_t = ViewMode::Grid)]
        view: ViewMode,
    },
    /// Settings form defaults for one tab
    Settings {
        #[arg(long, default_value_t = SettingsTab::Profile)]
        tab: SettingsTab,
    },
    /// Search every page at once
    Search { query: String },
}

pub fn run() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = LoadOptions {
        config_path: cli.config,
        catalog_path: cli.catalog,
        date: cli.date,
    };

    let state = match commands::open_state(&options) {
        Ok(state) => state,
        Err(err) => return print_error(&err),
    };

    match cli.command {
        Command::Dashboard => print_json(&commands::get_dashboard(&state)),
        Command::Projects { query, tab } => {
            print_json(&commands::get_projects(&state, &ProjectsView { query, tab }))
        }
        Command::Calendar { day, view } => print_json(&commands::get_calendar(
            &state,
            &CalendarView {
                selected_date: day,
                view,
            },
        )),
        Command::Documents { query, tab, view } => print_json(&commands::get_documents(
            &state,
            &DocumentsView { query, tab, view },
        )),
        Command::Settings { tab } => print_json(&commands::get_settings(&state, tab)),
        Command::Search { query } => print_json(&commands::search(&state, &query)),
    }
}

fn print_json<T: Serialize>(payload: &T) -> ExitCode {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize payload: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(err: &CommandError) -> ExitCode {
    match serde_json::to_string_pretty(err) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", err.message),
    }
    ExitCode::FAILURE
}
