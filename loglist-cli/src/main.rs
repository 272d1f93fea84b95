mod command;
mod paths;
mod render;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, info, warn};
use loglist_lib::error::{ConfigError, NavigationError, SourceError};
use loglist_lib::list::Decoration;
use loglist_lib::model::Column;
use loglist_lib::source::JsonFileSource;
use loglist_lib::view::{Dispatch, ViewAllTarget};
use loglist_lib::{CompactListView, ListConfig, PagedListView};
use simplelog::{Config, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP};

/// Browse the logs related to a record from a JSON snapshot.
#[derive(Debug, Parser)]
#[command(name = "loglist", version)]
struct Args {
    /// JSON file holding an array of log records.
    #[arg(long)]
    rows: PathBuf,

    /// Parent record whose logs are listed.
    #[arg(long)]
    record_id: String,

    /// Only list rows whose FIELD equals the record id.
    #[arg(long, value_name = "FIELD")]
    parent_field: Option<String>,

    /// List config (JSON). Defaults to config.json in the config dir, if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open "view all" as a console subtab instead of a page navigation.
    #[arg(long)]
    console: bool,

    /// Denormalize CreatedBy instead of LoggedBy__r.
    #[arg(long)]
    created_by: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("failed to encode navigation: {0}")]
    Encode(serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

fn load_config(args: &Args) -> Result<ListConfig, CliError> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => paths::config_file().filter(|p| p.exists()),
    };
    let mut config = match path {
        Some(path) => read_config(&path)?,
        None => ListConfig::default(),
    };
    if args.created_by {
        config.decoration = Decoration::created_by();
    }
    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<ListConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the full page a "view all" URL points at.
fn open_page(url: &str, title: &str, config: &ListConfig) -> Result<PagedListView, CliError> {
    let target = ViewAllTarget::from_url(url)?;
    let mut page = PagedListView::from_target(&target, config)?;
    page.set_title(title);
    Ok(page)
}

/// Waits out the spinner so output lands after the loading flash.
async fn settle(page: &PagedListView, config: &ListConfig) {
    if page.spinner_visible(Instant::now()) {
        tokio::time::sleep(config.spinner_hide_delay).await;
    }
}

fn report(result: Result<(), SourceError>) {
    if let Err(e) = result {
        eprintln!("error: {} (showing previous rows)", e);
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let mut source = JsonFileSource::new(&args.rows);
    if let Some(field) = &args.parent_field {
        source = source.with_parent_field(field.clone());
    }
    info!("browsing logs of {} from {}", args.record_id, args.rows.display());

    let columns = Column::log_columns();
    let mut compact = CompactListView::new(&args.record_id, columns.clone(), &config)?;
    report(compact.connect(&source).await);
    print!("{}", render::compact(&compact));

    let mut page = open_page(&compact.view_all_target().url()?, compact.title(), &config)?;
    let mut page_loaded = false;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else { break };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Compact => {
                report(compact.refresh(&source).await);
                print!("{}", render::compact(&compact));
            }
            Command::ViewAll => {
                let navigation = compact.view_all(args.console)?;
                println!("{}", render::navigation(&navigation).map_err(CliError::Encode)?);
                page = open_page(navigation.url(), compact.title(), &config)?;
                report(page.refresh(&source).await);
                page_loaded = true;
                settle(&page, &config).await;
                print!("{}", render::page(&page));
            }
            Command::Page if page_loaded => print!("{}", render::page(&page)),
            Command::Page | Command::Refresh => {
                report(page.refresh(&source).await);
                page_loaded = true;
                settle(&page, &config).await;
                print!("{}", render::page(&page));
            }
            Command::More => {
                if !page_loaded {
                    report(page.refresh(&source).await);
                    page_loaded = true;
                }
                if let Dispatch::LoadMore(outcome) = page.load_more() {
                    info!("load more: {:?}", outcome);
                }
                settle(&page, &config).await;
                print!("{}", render::page(&page));
            }
            Command::Sort(event) => {
                if !page_loaded {
                    report(page.refresh(&source).await);
                    page_loaded = true;
                }
                match page.sort_changed(event) {
                    Ok(_) => {
                        settle(&page, &config).await;
                        print!("{}", render::page(&page));
                    }
                    Err(e) => {
                        warn!("{}", e);
                        eprintln!("{}", e);
                    }
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
