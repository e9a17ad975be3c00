// NewsCheck Core Entry Point
// Single-submission analysis pipeline behind a thin CLI.

mod analysis;
mod config;
mod error;
mod prompts;
mod remote;
mod render;
mod text_source;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

use analysis::NewsAnalyzer;
use config::AppConfig;
use error::AppError;
use remote::GeminiClient;
use text_source::ArticleText;

/// NewsCheck - article credibility and bias checker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Article file to analyze (TXT or PDF); reads pasted text from stdin
    /// when omitted
    input: Option<PathBuf>,

    /// Path to a JSON config file (environment variables take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for chart-spec files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,
}

fn read_submission(args: &Args) -> Result<ArticleText, AppError> {
    match &args.input {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            ArticleText::from_upload(name, &bytes)
        }
        None => {
            let mut pasted = String::new();
            std::io::stdin()
                .read_to_string(&mut pasted)
                .map_err(AppError::Io)?;
            Ok(ArticleText::from_pasted(pasted))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    info!("Starting newscheck");

    let cfg = AppConfig::load(args.config.as_deref())?;

    let article = read_submission(&args)?;
    let analyzer = NewsAnalyzer::new(&cfg);
    let backend = GeminiClient::new(&cfg);

    let report = match analyzer.analyze(&article, &backend).await {
        Ok(report) => report,
        Err(AppError::Validation(msg)) => {
            // Empty submission: warn and stop, nothing was sent anywhere.
            warn!("{}", msg);
            println!("Warning: {}", msg);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", render::render_report(&report));
    render::write_charts(&args.output_dir, &report)?;
    info!("Charts written to {}", args.output_dir.display());

    Ok(())
}
