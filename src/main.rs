use clap::Parser;
use git_keywords::application::{FilterService, MetadataFetcher, Transform};
use git_keywords::cli::Cli;
use git_keywords::domain::{FilterMode, MarkerEngine, MarkerTable};
use git_keywords::error::KeywordError;
use git_keywords::infrastructure::{Config, GitRepository, ToolErrorPolicy};
use git_keywords::logging;
use std::io;
use std::str::FromStr;
use tracing::debug;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit with 1 like every other fatal error; help and version exit 0
            if e.use_stderr() {
                let _ = e.print();
                std::process::exit(1);
            }
            e.exit();
        }
    };

    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), KeywordError> {
    let mode = FilterMode::from_str(&cli.mode).map_err(KeywordError::Argument)?;

    let path = cli.path.trim();
    if path.is_empty() {
        return Err(KeywordError::Argument(
            "missing <path> argument".to_string(),
        ));
    }

    // Precedence: flag or env, then config file, then defaults
    let mut config = match &cli.config {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };
    if let Some(git) = cli.git {
        config.git = Some(git);
    }
    if let Some(policy) = &cli.on_tool_error {
        config.on_tool_error = ToolErrorPolicy::from_str(policy).map_err(KeywordError::Argument)?;
    }

    debug!(%mode, path, "starting filter");

    let transform = match mode {
        FilterMode::Smudge => {
            let repo = GitRepository::new(config.git_program());
            debug!(git = repo.program(), policy = %config.on_tool_error, "fetching metadata");
            let metadata = MetadataFetcher::new(&repo, config.on_tool_error, &config.placeholders)
                .fetch(path)?;
            Transform::Smudge(metadata)
        }
        FilterMode::Clean => Transform::Clean,
    };

    let service = FilterService::new(MarkerEngine::new(MarkerTable::new()), transform);
    let lines = service.run(io::stdin().lock(), io::stdout().lock())?;

    debug!(lines, "filter finished");
    Ok(())
}
