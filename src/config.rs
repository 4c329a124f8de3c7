use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub size: u32,
    pub max_overflow: u32,
    pub timeout_secs: u64,
    pub recycle_secs: i64, // <= 0 keeps connections forever
}

impl PoolConfig {
    pub fn max_connections(&self) -> u32 {
        self.size + self.max_overflow
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_lifetime(&self) -> Option<Duration> {
        (self.recycle_secs > 0).then(|| Duration::from_secs(self.recycle_secs as u64))
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: 20,
            max_overflow: 20,
            timeout_secs: 30,
            recycle_secs: -1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool: PoolConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            size: env_or("DB_POOL_SIZE", defaults.size),
            max_overflow: env_or("DB_MAX_OVERFLOW", defaults.max_overflow),
            timeout_secs: env_or("DB_POOL_TIMEOUT_SECS", defaults.timeout_secs),
            recycle_secs: env_or("DB_POOL_RECYCLE_SECS", defaults.recycle_secs),
        };
        Ok(Self {
            database_url,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("APP_PORT", 8080),
            pool,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
