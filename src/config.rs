use crate::domain::notify::DEFAULT_DETAIL_URL;
use crate::scraper::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const STATE_FILE_NAME: &str = "state.json";

#[derive(Parser, Debug)]
#[command(name = "airdrop_watch")]
#[command(about = "Report new and changed Alpha airdrop listings", long_about = None)]
pub struct Cli {
    /// Seed the state file from the current feed without reporting anything
    #[arg(long, conflicts_with = "dump")]
    pub init: bool,

    /// Print every fetched listing as a JSON line and exit
    #[arg(long)]
    pub dump: bool,

    /// State document path (defaults to state.json next to the executable)
    #[arg(long, env = "AIRDROP_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Feed endpoint
    #[arg(long, env = "AIRDROP_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Link appended to every notification
    #[arg(long, env = "AIRDROP_DETAIL_URL", default_value = DEFAULT_DETAIL_URL)]
    pub detail_url: String,

    /// Feed request timeout in seconds
    #[arg(long, env = "AIRDROP_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Init,
    Dump,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.init {
            Mode::Init
        } else if self.dump {
            Mode::Dump
        } else {
            Mode::Check
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Explicit path, else `state.json` beside the executable so cron runs
    /// find the same file whatever their working directory.
    pub fn state_path(&self) -> PathBuf {
        if let Some(path) = &self.state_file {
            return path.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(STATE_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(STATE_FILE_NAME))
    }
}
