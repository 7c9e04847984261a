//! CLI argument parsing for prtemplate

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prt")]
#[command(author, version, about = "PR template discovery and composition", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository checkout to scan (overrides config)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every PR template found in the checkout
    List {
        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Print the default template selected by precedence rules
    Default,

    /// Print one template, located by path or path suffix
    Show {
        /// Template path (absolute or checkout-relative)
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Compose a PR body from a template and generated content
    Compose {
        /// Template path (uses the default template when omitted)
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// File with generated content (reads stdin when omitted)
        #[arg(short = 'g', long)]
        content: Option<PathBuf>,
    },

    /// Replace the generated block in an existing PR body
    Update {
        /// File holding the current PR body
        #[arg(required = true)]
        body: PathBuf,

        /// File with new generated content (reads stdin when omitted)
        #[arg(short = 'g', long)]
        content: Option<PathBuf>,
    },
}
