//! Shared per-process state injected into all routes.

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // Per-provider timeouts are applied on each request; this is a
        // hard upper bound so a stuck connection cannot pin a request.
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { config, http }
    }
}
