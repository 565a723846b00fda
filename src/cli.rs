use crate::domain::models::Status;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "civix", version, about = "Civix citizen issue reporting CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new issue report with an evidence photo
    Submit {
        #[arg(long)]
        category: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, help = "Path to the evidence photo")]
        photo: Option<PathBuf>,
    },
    /// List reports, newest first
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        status: Option<Status>,
    },
    /// Show a single report by id
    Show { id: String },
    /// Authority dashboard: per-status counts and styled rows
    Dashboard {
        #[arg(long, value_enum)]
        status: Option<Status>,
    },
    /// Move a report to a new workflow status
    SetStatus {
        id: String,
        #[arg(value_enum)]
        status: Status,
    },
}
