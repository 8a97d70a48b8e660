use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SHOWCASE_ROTATION_MS: u64 = 3000;
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_REGISTER_PATH: &str = "/register";
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 1800;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

pub const MAX_SHOWCASE_ROTATION_MS: u64 = 60 * 60 * 1000;
pub const MAX_SESSION_IDLE_TIMEOUT_SECS: u64 = 7 * 24 * 60 * 60;
pub const MAX_SESSION_SWEEP_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub showcase_rotation_ms: u64,
    pub login_path: String,
    pub register_path: String,
    pub session_idle_timeout_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            showcase_rotation_ms: DEFAULT_SHOWCASE_ROTATION_MS,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            session_idle_timeout_secs: DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
            session_sweep_interval_secs: DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut config = Self {
            bind_addr: parse_var("BIND_ADDR", defaults.bind_addr),
            showcase_rotation_ms: parse_var("SHOWCASE_ROTATION_MS", defaults.showcase_rotation_ms),
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| {
                warn!("LOGIN_PATH not set, using default");
                defaults.login_path.clone()
            }),
            register_path: env::var("REGISTER_PATH").unwrap_or_else(|_| {
                warn!("REGISTER_PATH not set, using default");
                defaults.register_path.clone()
            }),
            session_idle_timeout_secs: parse_var(
                "SESSION_IDLE_TIMEOUT_SECS",
                defaults.session_idle_timeout_secs,
            ),
            session_sweep_interval_secs: parse_var(
                "SESSION_SWEEP_INTERVAL_SECS",
                defaults.session_sweep_interval_secs,
            ),
            max_sessions: parse_var("MAX_SESSIONS", defaults.max_sessions),
        };

        if !config.is_valid() {
            warn!("Invalid landing configuration, falling back to defaults for bad values");
            config.repair(&defaults);
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        (1..=MAX_SHOWCASE_ROTATION_MS).contains(&self.showcase_rotation_ms)
            && (1..=MAX_SESSION_IDLE_TIMEOUT_SECS).contains(&self.session_idle_timeout_secs)
            && (1..=MAX_SESSION_SWEEP_INTERVAL_SECS).contains(&self.session_sweep_interval_secs)
            && self.max_sessions > 0
            && self.login_path.starts_with('/')
            && self.register_path.starts_with('/')
    }

    pub fn rotation_period(&self) -> Duration {
        Duration::from_millis(self.showcase_rotation_ms)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs)
    }

    fn repair(&mut self, defaults: &Self) {
        if !(1..=MAX_SHOWCASE_ROTATION_MS).contains(&self.showcase_rotation_ms) {
            self.showcase_rotation_ms = defaults.showcase_rotation_ms;
        }
        if !(1..=MAX_SESSION_IDLE_TIMEOUT_SECS).contains(&self.session_idle_timeout_secs) {
            self.session_idle_timeout_secs = defaults.session_idle_timeout_secs;
        }
        if !(1..=MAX_SESSION_SWEEP_INTERVAL_SECS).contains(&self.session_sweep_interval_secs) {
            self.session_sweep_interval_secs = defaults.session_sweep_interval_secs;
        }
        if self.max_sessions == 0 {
            self.max_sessions = defaults.max_sessions;
        }
        if !self.login_path.starts_with('/') {
            self.login_path = defaults.login_path.clone();
        }
        if !self.register_path.starts_with('/') {
            self.register_path = defaults.register_path.clone();
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an unparseable value {:?}, using default", name, raw);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default", name);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.rotation_period(), Duration::from_millis(3000));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn repair_restores_unusable_values() {
        let defaults = AppConfig::default();
        let mut config = AppConfig {
            showcase_rotation_ms: 0,
            login_path: "login".to_string(),
            max_sessions: 0,
            ..AppConfig::default()
        };
        assert!(!config.is_valid());

        config.repair(&defaults);
        assert!(config.is_valid());
        assert_eq!(config.showcase_rotation_ms, DEFAULT_SHOWCASE_ROTATION_MS);
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.max_sessions, DEFAULT_MAX_SESSIONS);
    }

    #[test]
    fn zero_idle_timeout_is_rejected() {
        let defaults = AppConfig::default();
        let mut config = AppConfig {
            session_idle_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(!config.is_valid());

        config.repair(&defaults);
        assert!(config.is_valid());
        assert_eq!(config.session_idle_timeout_secs, DEFAULT_SESSION_IDLE_TIMEOUT_SECS);
    }

    #[test]
    fn out_of_range_durations_are_rejected() {
        let defaults = AppConfig::default();
        let mut config = AppConfig {
            showcase_rotation_ms: MAX_SHOWCASE_ROTATION_MS + 1,
            session_idle_timeout_secs: u64::MAX,
            session_sweep_interval_secs: u64::MAX,
            ..AppConfig::default()
        };
        assert!(!config.is_valid());

        config.repair(&defaults);
        assert!(config.is_valid());
        assert_eq!(config.showcase_rotation_ms, DEFAULT_SHOWCASE_ROTATION_MS);
        assert_eq!(config.session_idle_timeout_secs, DEFAULT_SESSION_IDLE_TIMEOUT_SECS);
        assert_eq!(config.session_sweep_interval_secs, DEFAULT_SESSION_SWEEP_INTERVAL_SECS);
    }

    #[test]
    fn bounds_are_inclusive() {
        let config = AppConfig {
            showcase_rotation_ms: MAX_SHOWCASE_ROTATION_MS,
            session_idle_timeout_secs: MAX_SESSION_IDLE_TIMEOUT_SECS,
            session_sweep_interval_secs: MAX_SESSION_SWEEP_INTERVAL_SECS,
            ..AppConfig::default()
        };
        assert!(config.is_valid());
    }
}
