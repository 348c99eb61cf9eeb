use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube transcript fetcher and summarizer", version)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub input: Option<String>,

    /// Summarize the transcript via LLM
    #[arg(short, long)]
    pub summarize: bool,

    /// Write transcript to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the primary provider, go straight to the timedtext fallback
    #[arg(long)]
    pub no_primary: bool,

    /// LLM model for summarization (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Show acquisition progress and upstream failure detail
    #[arg(short, long)]
    pub verbose: bool,
}
