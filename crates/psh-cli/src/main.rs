//! psh — Polyglot Shell client CLI.
//!
//! Interactive multi-language REPL backed by a remote shell service over
//! HTTP. Lines are executed remotely; the prompt follows whichever
//! language the service reports back.

mod commands;
mod config;
mod terminal;

use clap::Parser;
use tracing::error;

/// psh — Polyglot Shell client
#[derive(Parser)]
#[command(name = "psh", version = "0.1.0", about = "Polyglot Shell client — interactive multi-language REPL over HTTP")]
struct Cli {
    /// Shell service URL, e.g. http://localhost:8080/shell
    ///
    /// Falls back to the `url` value in the config file when omitted.
    url: Option<String>,

    /// Send a single line, print the result, and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,

    /// Initial prompt, shown until the service reports a language switch
    #[arg(long = "prompt", value_name = "PROMPT")]
    prompt: Option<String>,

    /// Request timeout in seconds (0 = wait forever)
    #[arg(long = "timeout-secs", value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Config file path
    #[arg(long = "config")]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing.
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("psh=debug,psh_cli=debug,psh_client=debug,psh_core=debug")
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("psh=warn,psh_cli=warn")
            .with_target(false)
            .init();
    }

    // Load config file.
    let config_path = cli.config.clone().unwrap_or_else(|| {
        let home = dirs::home_dir().unwrap_or_default();
        home.join(".psh").join("config.toml").to_string_lossy().to_string()
    });
    let cfg = config::Config::load(&config_path).unwrap_or_default();

    // Determine effective URL, prompt, and timeout (CLI overrides config).
    let url = cli.url.clone().or_else(|| {
        if cfg.default.url.is_empty() {
            None
        } else {
            Some(cfg.default.url.clone())
        }
    });
    let prompt = cli.prompt.clone().unwrap_or_else(|| cfg.default.prompt.clone());
    let timeout_secs = cli.timeout_secs.unwrap_or(cfg.default.timeout_secs);

    let Some(url) = url else {
        eprintln!("Usage: psh <service-url> [-c <line>]\n\nRun `psh --help` for full usage.");
        std::process::exit(1);
    };

    let result = match cli.command {
        Some(line) => commands::exec::run(&url, timeout_secs, &prompt, &line).await,
        None => commands::repl::run(&url, timeout_secs, &prompt).await,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("psh: {e:#}");
        std::process::exit(1);
    }
}
