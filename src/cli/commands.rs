//! CLI command implementations
//!
//! Each command loads configuration, applies the log level, picks a snapshot
//! source and then drives the tracker service on a tokio runtime.

use std::path::Path;
use std::sync::Arc;

use crate::config::TrackerConfig;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::source::{FileSnapshotSource, HttpSnapshotSource, SnapshotSource};
use crate::tracker::{ListQuery, SortDirection, TrackerService};

use super::args::{Command, SourceArgs};
use super::errors::{CliError, CliResult};
use super::io::write_pretty;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { source } => serve(&source),
        Command::List {
            source,
            fields,
            filter,
            sort_dir,
            limit,
            offset,
        } => {
            let mut query = ListQuery::default()
                .with_sort_dir(SortDirection::parse(&sort_dir).unwrap_or_default())
                .with_limit(limit)
                .with_offset(offset);
            if let Some(fields) = fields {
                query = query.with_fields(fields);
            }
            if let Some(filter) = filter {
                query = query.with_filter(filter);
            }
            list(&source, &query)
        }
        Command::Get {
            location_id,
            source,
        } => get(&source, &location_id),
    }
}

/// Start the HTTP API and serve until the process is stopped
pub fn serve(args: &SourceArgs) -> CliResult<()> {
    log_event(Event::BootStart);
    let (config, service) = boot(args)?;

    let server = HttpServer::new(config, service);
    block_on(async move {
        server.start().await.map_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(Event::BootFailed, &[("reason", reason.as_str())]);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Run one list query and print the records to stdout
pub fn list(args: &SourceArgs, query: &ListQuery) -> CliResult<()> {
    let (_, service) = boot(args)?;
    let records = block_on(async { service.list(query).await.map_err(CliError::from) })?;
    write_pretty(std::io::stdout().lock(), &records)
}

/// Look up one record and print it to stdout
pub fn get(args: &SourceArgs, location_id: &str) -> CliResult<()> {
    let (_, service) = boot(args)?;
    let record = block_on(async {
        service
            .get_by_location_id(location_id)
            .await
            .map_err(CliError::from)
    })?;
    write_pretty(std::io::stdout().lock(), &record)
}

/// Load configuration, set the log level and build the service
fn boot(args: &SourceArgs) -> CliResult<(TrackerConfig, TrackerService)> {
    let config = load_config(&args.config)?;
    let source = select_source(&config, args.csv.as_deref())?;
    Ok((config, TrackerService::from_arc(source)))
}

fn load_config(path: &Path) -> CliResult<TrackerConfig> {
    let config = TrackerConfig::load_or_default(path)?.apply_env()?;
    Logger::set_min_severity(config.severity()?);

    let port = config.port.to_string();
    let path = path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", path.as_str()), ("port", port.as_str())],
    );
    Ok(config)
}

fn select_source(config: &TrackerConfig, csv: Option<&Path>) -> CliResult<Arc<dyn SnapshotSource>> {
    match csv {
        Some(path) => Ok(Arc::new(FileSnapshotSource::new(path))),
        None => {
            let source = HttpSnapshotSource::new(config.source_url.clone(), config.source_timeout())?;
            Ok(Arc::new(source))
        }
    }
}

fn block_on<F, T>(future: F) -> CliResult<T>
where
    F: std::future::Future<Output = CliResult<T>>,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use std::io::Write;
    use std::path::PathBuf;

    fn csv_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locationid,Applicant,FacilityType").unwrap();
        writeln!(file, "1735061,Bay Area Mobile Catering,Truck").unwrap();
        file
    }

    fn args(csv: &Path) -> SourceArgs {
        SourceArgs {
            config: PathBuf::from("/nonexistent/food-tracker.json"),
            csv: Some(csv.to_path_buf()),
        }
    }

    #[test]
    fn test_list_from_csv() {
        let file = csv_file();
        assert!(list(&args(file.path()), &ListQuery::default()).is_ok());
    }

    #[test]
    fn test_get_missing_record() {
        let file = csv_file();
        let err = get(&args(file.path()), "nonexistent").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotFound);
    }

    #[test]
    fn test_bad_config_is_reported() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        write!(config, "{{").unwrap();
        let args = SourceArgs {
            config: config.path().to_path_buf(),
            csv: None,
        };

        let err = list(&args, &ListQuery::default()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
