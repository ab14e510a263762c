use animal_rescue_db::DEFAULT_MAX_CONNECTIONS;
use animal_rescue_services::aggregation::DEFAULT_CONCURRENCY;
use animal_rescue_services::AggregationStrategy;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How `GET /animals` loads adoption requests (default: `per_animal`).
    pub aggregation_strategy: AggregationStrategy,
    /// Per-animal lookups allowed in flight (default: `8`).
    ///
    /// A `per_animal` listing holds one pooled connection for the animal
    /// stream plus up to this many for the lookups, so the value is capped at
    /// half of `db_max_connections`.
    pub aggregation_concurrency: usize,
    /// Postgres pool size (default: `20`).
    pub db_max_connections: u32,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `8080`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `AGGREGATION_STRATEGY`    | `per_animal`               |
    /// | `AGGREGATION_CONCURRENCY` | `8`                        |
    /// | `DATABASE_MAX_CONNECTIONS`| `20`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let aggregation_strategy: AggregationStrategy = std::env::var("AGGREGATION_STRATEGY")
            .unwrap_or_else(|_| "per_animal".into())
            .parse()
            .unwrap_or_else(|e| panic!("AGGREGATION_STRATEGY is invalid: {e}"));

        let db_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32")
            .max(1);

        let requested_concurrency: usize = std::env::var("AGGREGATION_CONCURRENCY")
            .unwrap_or_else(|_| DEFAULT_CONCURRENCY.to_string())
            .parse()
            .expect("AGGREGATION_CONCURRENCY must be a valid usize");
        let aggregation_concurrency = cap_concurrency(requested_concurrency, db_max_connections);
        if aggregation_concurrency < requested_concurrency {
            tracing::warn!(
                requested = requested_concurrency,
                capped = aggregation_concurrency,
                db_max_connections,
                "AGGREGATION_CONCURRENCY exceeds half the connection pool; capping",
            );
        }

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            aggregation_strategy,
            aggregation_concurrency,
            db_max_connections,
            jwt,
        }
    }
}

/// Keep per-listing lookups to at most half the pool, and at least one.
fn cap_concurrency(requested: usize, db_max_connections: u32) -> usize {
    let ceiling = (db_max_connections as usize / 2).max(1);
    requested.clamp(1, ceiling)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            ["http://a.test", "http://b.test"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn concurrency_is_capped_at_half_the_pool() {
        assert_eq!(cap_concurrency(8, 20), 8);
        assert_eq!(cap_concurrency(16, 20), 10);
        assert_eq!(cap_concurrency(8, 1), 1);
        assert_eq!(cap_concurrency(0, 20), 1);
    }
}
