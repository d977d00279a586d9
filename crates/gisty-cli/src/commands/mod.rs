//! CLI command definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub mod comment;
pub mod comments;
pub mod completions;
pub mod create;
pub mod get;
pub mod list;
pub mod update;
pub mod utils;

#[cfg(test)]
mod test_mocks;

/// gisty - GitHub gists from the command line.
#[derive(Parser, Debug)]
#[command(name = "gisty")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub API URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a gist
    Get {
        /// Gist ID
        id: String,
    },

    /// List a user's gists
    List {
        /// User login
        user: String,
    },

    /// Create a gist from local files
    Create {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Gist description
        #[arg(short, long)]
        description: Option<String>,

        /// Make the gist public
        #[arg(long)]
        public: bool,

        /// Create the gist under this user's login
        #[arg(long, value_name = "LOGIN")]
        user: Option<String>,
    },

    /// Update a gist's description or files
    Update {
        /// Gist ID
        id: String,

        /// Files to add or replace
        files: Vec<PathBuf>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Comment on a gist
    Comment {
        /// Gist ID
        gist_id: String,

        /// Comment text
        body: String,
    },

    /// List the comments on a gist
    Comments {
        /// Gist ID
        gist_id: String,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
