use serde::Deserialize;

/// Cookie-session settings. The secret keys the cookie signature; the
/// store behind it is process-local memory.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
}

// Signing keys need 64 bytes of material; anything shorter is rejected up
// front instead of panicking inside the cookie layer.
const MIN_SECRET_LEN: usize = 64;

const DEV_SESSION_SECRET: &str =
    "blogfeed-development-session-secret-0123456789abcdef0123456789abcdef";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let secret = match std::env::var("SESSION_SECRET") {
            Ok(s) => s,
            Err(_) => {
                tracing::warn!("SESSION_SECRET not set; using development default");
                DEV_SESSION_SECRET.to_string()
            }
        };
        anyhow::ensure!(
            secret.len() >= MIN_SECRET_LEN,
            "SESSION_SECRET must be at least {MIN_SECRET_LEN} bytes"
        );
        let ttl_hours = std::env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);
        Ok(Self {
            database_url,
            session: SessionConfig { secret, ttl_hours },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_secret_is_long_enough_for_a_signing_key() {
        assert!(DEV_SESSION_SECRET.len() >= MIN_SECRET_LEN);
    }
}
