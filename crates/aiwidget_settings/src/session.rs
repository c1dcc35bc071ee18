//! Session strategy and cache reuse rules

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;

/// Lifetime of a manual-mode session before its channel is recreated
pub const MANUAL_SESSION_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Who owns the user session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStrategy {
    /// The backend creates and refreshes an anonymous user
    Auto,
    /// The embedder supplies the user and its session token
    Manual,
}

impl SessionStrategy {
    /// Manual only when the embedder gave a configurator, a user id and a token
    pub fn for_config(config: &WidgetConfig) -> Self {
        let manual = config.session_configurator().is_some()
            && config.injected_user_id().is_some()
            && config.injected_session_token().is_some();

        if manual {
            Self::Manual
        } else {
            Self::Auto
        }
    }
}

/// Resolved session (also the persisted cache record)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSession {
    pub strategy: SessionStrategy,
    pub user_id: String,
    /// Milliseconds since the Unix epoch; `0` until a manual session completes
    pub expire_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

/// Decide whether a cached session can be reused.
///
/// - never when clearing, when there is no cache, or when the strategy changed
/// - manual: not expired and cached for the same injected user
/// - auto: not expired
pub fn should_use_cached_session(
    cache: Option<&WidgetSession>,
    strategy: SessionStrategy,
    injected_user_id: Option<&str>,
    clear_cache: bool,
    now: i64,
) -> bool {
    if clear_cache {
        return false;
    }
    let Some(cache) = cache else {
        return false;
    };
    if cache.strategy != strategy {
        return false;
    }

    match cache.strategy {
        SessionStrategy::Manual => {
            !is_past_time(cache.expire_at, now) && injected_user_id == Some(cache.user_id.as_str())
        }
        SessionStrategy::Auto => !is_past_time(cache.expire_at, now),
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

pub fn date_n_days_later(now: i64, days: i64) -> i64 {
    now.saturating_add(days.saturating_mul(MILLIS_PER_DAY))
}

pub fn is_past_time(timestamp: i64, now: i64) -> bool {
    timestamp < now
}
