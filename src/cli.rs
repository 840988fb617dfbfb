use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{export, serve};

#[derive(Parser)]
#[command(name = "proforma")]
#[command(about = "Scenario-based revenue projection API and export tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        ///
        /// Falls back to the BIND_ADDRESS environment variable when omitted.
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Export a full scenario projection as JSON
    ///
    /// Writes the assumptions, outlook, timeseries, and growth tables
    /// for one scenario, either to a file or to stdout.
    Export {
        /// Scenario to export (conservative, normal, optimistic)
        #[arg(short, long, default_value = "normal")]
        scenario: String,

        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(bind_address.as_deref()).await?;
            }
            Commands::Export { scenario, output } => {
                export(&scenario, output.as_deref())?;
            }
        }
        Ok(())
    }
}
