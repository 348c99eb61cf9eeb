use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use log::{error, info};

mod cli;

use cli::Cli;

use ytsum::error::{SummaryError, TranscriptError};
use ytsum::provider::{InnerTubeProvider, TranscriptChain};
use ytsum::summarize::Summarizer;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    let cli = Cli::parse();

    // Config file is non-fatal if missing/invalid; env credential fills the
    // gap once, here at the boundary
    let mut config = ytsum::config::Config::load().unwrap_or_default();
    if config.api_key.is_none() {
        config.api_key = std::env::var("OPENROUTER_API_KEY").ok();
    }
    if let Some(ref model) = cli.model {
        config.model = Some(model.clone());
    }
    let show_detail = cli.verbose || config.show_detail.unwrap_or(false);

    let client = reqwest::Client::new();

    let mut chain = TranscriptChain::new(client.clone());
    if !cli.no_primary {
        chain = chain.with_primary(Box::new(InnerTubeProvider::new(client.clone())));
    }
    let summarizer = Summarizer::new(client.clone(), &config);

    // Collect inputs: from arg or stdin
    let inputs = if let Some(ref input) = cli.input {
        vec![input.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if inputs.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    for raw_input in &inputs {
        let raw_input = raw_input.trim();
        if raw_input.is_empty() {
            continue;
        }

        let video_id = ytsum::extract_video_id(raw_input).ok_or_else(|| {
            eyre::eyre!(
                "could not extract video ID from: {raw_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  <11-character video ID>"
            )
        })?;

        if cli.verbose {
            eprintln!("Fetching transcript for {video_id}");
        }

        let transcript = match chain.acquire(&video_id).await {
            Ok(text) => text,
            Err(TranscriptError::Http(e)) if !show_detail => {
                error!("fetch-transcript error for {video_id}: {e}");
                bail!("failed to fetch transcript");
            }
            Err(e) => return Err(e.into()),
        };

        let bounded = ytsum::bound_text(&transcript, ytsum::TRANSCRIPT_MAX_CHARS);

        if let Some(ref path) = cli.output {
            std::fs::write(path, &bounded)?;
            if cli.verbose {
                eprintln!("Transcript written to: {}", path.display());
            }
        } else {
            println!("{bounded}");
        }

        if cli.summarize {
            let summary = match summarizer.summarize(&bounded).await {
                Ok(text) => text,
                Err(SummaryError::Request(detail)) if !show_detail => {
                    error!("generate-summary error for {video_id}: {detail}");
                    bail!("failed to generate summary");
                }
                Err(e) => return Err(e.into()),
            };
            println!("\n--- Summary ---\n{summary}");
        }
    }

    Ok(())
}
