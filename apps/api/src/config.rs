use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Overall timeout for the remote-model call, in seconds.
    pub llm_timeout_secs: u64,
    pub limits: Limits,
}

/// Upload and input bounds enforced before any processing begins.
/// Kept as an explicit struct (not module statics) so tests can vary them.
#[derive(Debug, Clone)]
pub struct Limits {
    pub max_file_size: usize,
    pub min_job_description_len: usize,
    pub max_job_description_len: usize,
    pub max_resume_text_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_file_size: 2 * 1024 * 1024, // 2 MiB
            min_job_description_len: 10,
            max_job_description_len: 10_000,
            max_resume_text_len: 15_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            limits: Limits::default(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
