#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fallback `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on scrapes in flight during a batch run. Always at least 1.
    pub max_concurrent_scrapes: usize,
    /// Host marker a link must contain before batch mode will scrape it.
    pub site_host: String,
}
