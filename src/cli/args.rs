//! CLI argument definitions using clap
//!
//! Commands:
//! - food-tracker serve --config <path>
//! - food-tracker list --config <path> [--csv <path>] [--fields ...] [--filter ...]
//! - food-tracker get <LOCATION_ID> --config <path> [--csv <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Food tracker - query San Francisco mobile food facility permits
#[derive(Parser, Debug)]
#[command(name = "food-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where the snapshot comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(long, default_value = "./food-tracker.json")]
    pub config: PathBuf,

    /// Read the snapshot from a local CSV export instead of the configured URL
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run a single list query and print the result
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Comma-separated extra fields to return
        #[arg(long)]
        fields: Option<String>,

        /// JSON filter object
        #[arg(long)]
        filter: Option<String>,

        /// Sort direction by applicant: ASC or DESC
        #[arg(long, default_value = "ASC")]
        sort_dir: String,

        /// Maximum number of records
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Number of records to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Look up one record by location id and print it
    Get {
        /// Location id to look up
        location_id: String,

        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["food-tracker", "list"]).unwrap();
        match cli.command {
            Command::List {
                source,
                fields,
                sort_dir,
                limit,
                offset,
                ..
            } => {
                assert_eq!(source.config, PathBuf::from("./food-tracker.json"));
                assert!(source.csv.is_none());
                assert!(fields.is_none());
                assert_eq!(sort_dir, "ASC");
                assert_eq!(limit, 10);
                assert_eq!(offset, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_get_with_csv() {
        let cli =
            Cli::try_parse_from(["food-tracker", "get", "1735061", "--csv", "rows.csv"]).unwrap();
        match cli.command {
            Command::Get {
                location_id,
                source,
            } => {
                assert_eq!(location_id, "1735061");
                assert_eq!(source.csv, Some(PathBuf::from("rows.csv")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_get_requires_location_id() {
        assert!(Cli::try_parse_from(["food-tracker", "get"]).is_err());
    }
}
