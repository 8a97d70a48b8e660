use std::sync::Arc;

use axum::{body::Body, response::Response};
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub showcase_rotation_ms: u64,
    pub login_path: String,
    pub register_path: String,
    pub session_idle_timeout_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub max_sessions: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            showcase_rotation_ms: 3000,
            login_path: "/login".to_string(),
            register_path: "/register".to_string(),
            session_idle_timeout_secs: 1800,
            session_sweep_interval_secs: 60,
            max_sessions: 16,
        }
    }
}

impl TestConfig {
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    pub fn with_idle_timeout_secs(mut self, secs: u64) -> Self {
        self.session_idle_timeout_secs = secs;
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            showcase_rotation_ms: self.showcase_rotation_ms,
            login_path: self.login_path.clone(),
            register_path: self.register_path.clone(),
            session_idle_timeout_secs: self.session_idle_timeout_secs,
            session_sweep_interval_secs: self.session_sweep_interval_secs,
            max_sessions: self.max_sessions,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Collects a response body and parses it as JSON.
pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&body).expect("response body should be JSON")
}

/// Collects a response body as UTF-8 text.
pub async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    String::from_utf8(body.to_vec()).expect("response body should be UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_into_app_config() {
        let config = TestConfig::default()
            .with_max_sessions(2)
            .with_idle_timeout_secs(5)
            .to_app_config();

        assert_eq!(config.max_sessions, 2);
        assert_eq!(config.session_idle_timeout_secs, 5);
        assert!(config.is_valid());
    }

    #[tokio::test]
    async fn read_json_parses_body() {
        let response = Response::new(Body::from(r#"{"ok":true}"#));
        let json = read_json(response).await;
        assert_eq!(json["ok"], true);
    }
}
