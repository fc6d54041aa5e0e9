//! Page-level configuration.
//!
//! Read from an optional `<script id="storefront-config" type="application/json">`
//! block on the host page. Every field has a default, so an empty object (or no
//! block at all) gives the stock storefront behaviour.

use anyhow::{Result, bail};
use crate::countdown::{DEFAULT_COUNTDOWN_DAYS, MAX_COUNTDOWN_DAYS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Element id of the JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub asset_base: String,
    pub api_base: String,
    pub log_level: String,
    pub slide_interval_ms: u32,
    pub ticker_step_px: f64,
    pub ticker_gap_px: f64,
    pub ticker_start_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    pub countdown_days: i64,
    pub countdown_deadline: Option<DateTime<Utc>>,
    pub countdown_tick_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_exit_ms: u32,
    pub cart_pulse_ms: u32,
    pub signup_redirect_delay_ms: u32,
    pub login_redirect_delay_ms: u32,
    pub logout_delay_ms: u32,
    pub min_password_len: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            asset_base: "/static/images".to_owned(),
            api_base: String::new(),
            log_level: "info".to_owned(),
            slide_interval_ms: 3_000,
            ticker_step_px: 1.0,
            ticker_gap_px: 30.0,
            ticker_start_delay_ms: 100,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            reveal_stagger_ms: 80,
            countdown_days: DEFAULT_COUNTDOWN_DAYS,
            countdown_deadline: None,
            countdown_tick_ms: 60_000,
            toast_duration_ms: 3_000,
            toast_exit_ms: 500,
            cart_pulse_ms: 300,
            signup_redirect_delay_ms: 1_500,
            login_redirect_delay_ms: 1_000,
            logout_delay_ms: 500,
            min_password_len: 6,
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: StorefrontConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let intervals = [
            ("slide_interval_ms", self.slide_interval_ms),
            ("countdown_tick_ms", self.countdown_tick_ms),
            ("toast_duration_ms", self.toast_duration_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                bail!("{name} must be greater than zero");
            }
        }
        if self.ticker_step_px.is_nan() || self.ticker_step_px <= 0.0 {
            bail!("ticker_step_px must be positive");
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            bail!("reveal_threshold must be within 0..=1");
        }
        if !(0..=MAX_COUNTDOWN_DAYS).contains(&self.countdown_days) {
            bail!("countdown_days must be within 0..={MAX_COUNTDOWN_DAYS}");
        }
        Ok(())
    }

    /// Joins `api_base` and an endpoint path such as `/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn max_level(&self) -> tracing::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}
