use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Search URL template; a page URL is `{baseUrl}{query}&page={n}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Optional delay in seconds between page fetches.
    #[serde(default = "default_throttle")]
    pub throttle: Option<f32>,

    /// Strategy for transport-level fetch errors. A non-200 status is
    /// always skipped with a notice, independently of this setting.
    #[serde(default = "default_on_fetch_error")]
    pub on_fetch_error: OnError,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            throttle: default_throttle(),
            on_fetch_error: default_on_fetch_error(),
        }
    }
}

impl ScraperConfig {
    pub fn load<P: AsRef<Path>>(file: P) -> anyhow::Result<Self> {
        let conf: Self = serde_yaml::from_str(&fs_err::read_to_string(file.as_ref())?)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Rejects values that would panic or stall at run time.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(delay) = self.throttle {
            if !delay.is_finite() || delay < 0.0 {
                anyhow::bail!("Invalid throttle delay: {delay} seconds");
            }
        }
        Ok(())
    }
}

fn default_user_agent() -> String {
    String::from(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    )
}

fn default_base_url() -> String {
    String::from("https://www.amazon.in/s?k=")
}

fn default_timeout() -> u64 {
    30
}

fn default_throttle() -> Option<f32> {
    None
}

fn default_on_fetch_error() -> OnError {
    OnError::SkipAndLog
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, clap::ArgEnum)]
pub enum OnError {
    Fail,
    SkipAndLog,
}
