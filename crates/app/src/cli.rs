use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for listing and resolution commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Returns true when JSON output was requested.
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Command-line interface for the `skillet` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillet",
    about = "Layered SKILL.md discovery and resolution for assistant tools"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skillet` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lists discovered skills across the personal and shared roots.
    #[command(alias = "list-skills")]
    List {
        /// Additional skill directories (repeatable, scanned as shared).
        #[arg(long = "skill-dir", value_name = "DIR")]
        skill_dirs: Vec<PathBuf>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Resolves a skill name to its document, honoring shadowing.
    Resolve {
        /// Skill name; prefix with `shared:` to bypass the personal root.
        #[arg(required = true)]
        name: String,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Prints a skill document body with its header stripped.
    #[command(alias = "cat")]
    Show {
        /// Skill name; prefix with `shared:` to bypass the personal root.
        #[arg(required = true)]
        name: String,
    },
    /// Checks whether the shared skills checkout is behind its remote.
    CheckUpdates {
        /// Directory to check (default: the shared skills root).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}
