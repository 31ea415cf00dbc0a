#[derive(Clone)]
pub struct AppConfig {
    pub alpha_vantage_api_key: String,
    pub news_api_key: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub news_window_days: i64,
    pub news_max_articles: u32,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("alpha_vantage_api_key", &"[redacted]")
            .field("news_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("news_window_days", &self.news_window_days)
            .field("news_max_articles", &self.news_max_articles)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
