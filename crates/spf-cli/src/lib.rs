//! spf-render - replay SPF backend responses through the package page view
//!
//! Reads a response body saved from the backend (search, download listing,
//! upload report or task-status poll), runs it through the same
//! [`spf_view::Dispatcher`] the page uses, and prints the resulting anchors
//! either as HTML or as a terminal preview.

pub mod render;

use clap::{Parser, Subcommand, ValueEnum};
use spf_view::dispatch::DEFAULT_JOURNAL_URI;
use spf_view::format::DEFAULT_DATE_PATTERN;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "spf-render")]
#[command(author, version, about = "Render SPF backend responses into the package page")]
pub struct Cli {
    /// Base URI journal and article links are built from
    #[arg(long, global = true, env = "SPF_JOURNAL_URI", default_value = DEFAULT_JOURNAL_URI)]
    pub journal_uri: String,

    /// TOML message catalog (message id = display text)
    #[arg(long, global = true, env = "SPF_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// strftime pattern for date cells
    #[arg(long, global = true, env = "SPF_DATE_FORMAT", default_value = DEFAULT_DATE_PATTERN)]
    pub date_format: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Which response the payload file holds
    #[command(subcommand)]
    pub command: Commands,
}

/// Response kinds, one per completed page operation.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Package search result
    Search {
        /// JSON response body
        payload: PathBuf,
    },
    /// Download-candidate listing
    Listing {
        /// JSON response body
        payload: PathBuf,
    },
    /// Upload ingestion report
    Upload {
        /// JSON response body
        payload: PathBuf,
    },
    /// Task-status poll
    Status {
        /// JSON response body
        payload: PathBuf,
    },
}

impl Commands {
    /// Path of the payload file
    pub fn payload(&self) -> &std::path::Path {
        match self {
            Self::Search { payload }
            | Self::Listing { payload }
            | Self::Upload { payload }
            | Self::Status { payload } => payload,
        }
    }
}

/// How the rendered page is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Page anchors as HTML markup
    Html,
    /// Tables and notifications for the terminal
    Text,
}
