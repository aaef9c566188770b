use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("HIVEMAP_ENV", "development"));

    let bind_addr = parse_addr("HIVEMAP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("HIVEMAP_LOG_LEVEL", "info");
    let vendors_path = PathBuf::from(or_default("HIVEMAP_VENDORS_PATH", "./config/vendors.yaml"));

    let rate_limit_max_requests = parse_usize("HIVEMAP_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("HIVEMAP_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        vendors_path,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should suffice");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.vendors_path.to_string_lossy(), "./config/vendors.yaml");
        assert_eq!(cfg.rate_limit_max_requests, 120);
        assert_eq!(cfg.rate_limit_window_secs, 60);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HIVEMAP_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HIVEMAP_BIND_ADDR"),
            "expected InvalidEnvVar(HIVEMAP_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_bind_addr_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HIVEMAP_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid override");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn build_app_config_vendors_path_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HIVEMAP_VENDORS_PATH", "/etc/hivemap/vendors.yaml");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid override");
        assert_eq!(
            cfg.vendors_path.to_string_lossy(),
            "/etc/hivemap/vendors.yaml"
        );
    }

    #[test]
    fn build_app_config_rate_limit_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HIVEMAP_RATE_LIMIT_MAX_REQUESTS", "10");
        map.insert("HIVEMAP_RATE_LIMIT_WINDOW_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid override");
        assert_eq!(cfg.rate_limit_max_requests, 10);
        assert_eq!(cfg.rate_limit_window_secs, 5);
    }

    #[test]
    fn build_app_config_rate_limit_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HIVEMAP_RATE_LIMIT_MAX_REQUESTS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HIVEMAP_RATE_LIMIT_MAX_REQUESTS"),
            "expected InvalidEnvVar(HIVEMAP_RATE_LIMIT_MAX_REQUESTS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_environment_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HIVEMAP_ENV", "production");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid override");
        assert_eq!(cfg.env, Environment::Production);
    }
}
