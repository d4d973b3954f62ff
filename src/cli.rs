use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio About Me client")]
pub struct CommandLine {
    /// Config file to use instead of the search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend root URL, overrides config and FOLIO_API_BASE
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Dates after this day (YYYY-MM-DD) are shown as "Present"
    #[arg(long, global = true)]
    pub cutoff: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and print the whole About page
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Print only the experience timeline
    Experiences {
        #[arg(long)]
        json: bool,
    },
    /// Send the contact form
    Contact {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Write the default configuration file
    InitConfig {
        #[arg(long, default_value = crate::config::CONFIG_FILE_NAME)]
        path: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        CommandLine::parse()
    }
}
