use std::{str::FromStr, time::Duration};

/// Default requests per second allowed per client IP on the game API
pub const DEFAULT_RATE_LIMIT: usize = 100;

/// Default upper bound on request handling time
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Server configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Whether ENVIRONMENT is development
    pub development: bool,
    /// Requests per second per IP on `/toh/v1`
    pub rate_limit: usize,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let development = is_development(lookup("ENVIRONMENT").as_deref());

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup("PORT"), 8000),
            development,
            rate_limit: parse_nonzero_or(
                "RATE_LIMIT_PER_SECOND",
                lookup("RATE_LIMIT_PER_SECOND"),
                DEFAULT_RATE_LIMIT,
            ),
            request_timeout: Duration::from_secs(parse_nonzero_or(
                "REQUEST_TIMEOUT_SECONDS",
                lookup("REQUEST_TIMEOUT_SECONDS"),
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )),
        }
    }

    /// Address to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Install the global tracing subscriber
///
/// Reads ENVIRONMENT directly so it can run before `Config::from_env`,
/// whose warnings would otherwise go nowhere.
pub fn init_tracing() {
    let development = is_development(std::env::var("ENVIRONMENT").ok().as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter(development).into()),
        )
        .init();
}

fn is_development(environment: Option<&str>) -> bool {
    matches!(environment, Some("development") | Some("dev"))
}

/// Default tracing filter when RUST_LOG is unset
fn log_filter(development: bool) -> &'static str {
    if development {
        "tower_of_hanoi=debug,tower_http=debug"
    } else {
        "tower_of_hanoi=info,tower_http=warn"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparseable {}={:?}, using default", key, value);
            default
        }),
    }
}

/// Like `parse_or`, but zero also falls back to the default
fn parse_nonzero_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Default + PartialEq,
{
    match raw.as_deref().map(|value| value.trim().parse::<T>()) {
        None => default,
        Some(Ok(value)) if value != T::default() => value,
        Some(Ok(_)) => {
            tracing::warn!("Ignoring {}=0, using default", key);
            default
        }
        Some(Err(_)) => {
            let value = raw.as_deref().unwrap_or_default();
            tracing::warn!("Ignoring unparseable {}={:?}, using default", key, value);
            default
        }
    }
}
