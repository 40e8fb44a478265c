//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `cyberguardian` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use cyberguardian::config::{
    DB_FILE_NAME, DEFAULT_DASHBOARD_PORT, DEFAULT_HISTORY_LIMIT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use cyberguardian::initialization::init_logger_with;
use cyberguardian::report::{console, pdf};
use cyberguardian::{init_client, scanner, Config, HistoryStore, LogFormat, LogLevel, ScanResult};

#[derive(Debug, Parser)]
#[command(
    name = "cyberguardian",
    version,
    about = "Checks a website for HTTP security headers and keeps a score history."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// History database path (SQLite file)
    #[arg(long, global = true, default_value = DB_FILE_NAME)]
    db_path: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan one site and print the report
    Scan {
        /// URL or bare hostname; prompted for when omitted
        url: Option<String>,

        /// Also write a PDF report to this path
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Print the result as JSON instead of colored text
        #[arg(long)]
        json: bool,

        /// Do not record the scan in the history
        #[arg(long)]
        no_save: bool,
    },
    /// Show the most recent scans
    History {
        /// Number of rows to show
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },
    /// Delete every recorded scan
    Clear,
    /// Serve the web dashboard
    Dashboard {
        /// Port to listen on (127.0.0.1)
        #[arg(long, default_value_t = DEFAULT_DASHBOARD_PORT)]
        port: u16,
    },
}

impl GlobalOpts {
    fn to_config(&self) -> Config {
        Config {
            db_path: self.db_path.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}

fn prompt_for_url() -> Result<String> {
    println!("{}", console::banner());
    print!("Enter the URL of the site to scan: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}

async fn run_scan_command(
    config: &Config,
    url: Option<String>,
    pdf_path: Option<PathBuf>,
    json: bool,
    no_save: bool,
) -> Result<bool> {
    let input = match url {
        Some(url) => url.trim().to_string(),
        None => prompt_for_url()?,
    };
    if input.is_empty() {
        anyhow::bail!("No URL given");
    }

    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let result = if no_save {
        scanner::analyze_site(&client, &input).await
    } else {
        let store = HistoryStore::new(&config.db_path);
        store
            .init()
            .await
            .context("Failed to initialize history store")?;
        cyberguardian::scan_and_record(&client, &store, &input)
            .await
            .context("Failed to record scan")?
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        println!("{}", console::render_scan(&result));
    }

    if let (ScanResult::Completed(report), Some(path)) = (&result, pdf_path) {
        let bytes = pdf::generate_pdf_report(report).context("Failed to build PDF report")?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write PDF to {}", path.display()))?;
        println!("PDF report saved to {}", path.display());
    }

    Ok(result.is_completed())
}

async fn run_history_command(config: &Config, limit: u32) -> Result<bool> {
    let store = HistoryStore::new(&config.db_path);
    store
        .init()
        .await
        .context("Failed to initialize history store")?;
    let records = store
        .list_recent(limit)
        .await
        .context("Failed to read history")?;
    println!("{}", console::render_history(&records));
    Ok(true)
}

async fn run_clear_command(config: &Config) -> Result<bool> {
    let store = HistoryStore::new(&config.db_path);
    store
        .init()
        .await
        .context("Failed to initialize history store")?;
    let removed = store.clear().await.context("Failed to clear history")?;
    println!("History cleared ({removed} scans removed).");
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG may come from a .env file next to the working directory
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.global.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Scan {
            url,
            pdf,
            json,
            no_save,
        } => run_scan_command(&config, url, pdf, json, no_save).await,
        Command::History { limit } => run_history_command(&config, limit).await,
        Command::Clear => run_clear_command(&config).await,
        Command::Dashboard { port } => {
            let config = Config {
                dashboard_port: port,
                ..config.clone()
            };
            cyberguardian::dashboard::serve(&config).await.map(|_| true)
        }
    };

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("cyberguardian error: {:#}", e);
            process::exit(1);
        }
    }
}
