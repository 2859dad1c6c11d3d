use clap::Parser;
use once_cell::sync::Lazy;

/// Name of the session cookie carrying the signed token.
pub const AUTH_COOKIE: &str = "auth_token";

pub const ROLE_FACULTY: &str = "faculty";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPERADMIN: &str = "superadmin";

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    // Connection pool bounds. The pool is the only shared mutable resource;
    // everything else is per-request.
    #[clap(long, env, default_value_t = 25)]
    pub db_max_connections: u32,

    #[clap(long, env, default_value_t = 5)]
    pub db_min_connections: u32,

    #[clap(long, env, default_value_t = 10)]
    pub db_connect_timeout_secs: u64,

    #[clap(long, env, default_value_t = 1800)]
    pub db_idle_timeout_secs: u64,

    #[clap(long, env, default_value_t = 3600)]
    pub db_max_lifetime_secs: u64,

    #[clap(long, env)]
    pub jwt_secret: String,

    /// Session token (and cookie) lifetime. Tokens cannot be revoked before
    /// they expire, so keep this reasonable.
    #[clap(long, env, default_value_t = 168)]
    pub token_validity_hours: i64,

    /// Comma-separated origin allow-list. "*" allows any origin but
    /// disables credentials.
    #[clap(long, env, default_value = "http://localhost:3000,http://localhost:5173")]
    pub cors_allowed_origins: String,

    #[clap(long, env, default_value = "superadmin")]
    pub superadmin_username: String,

    #[clap(long, env)]
    pub superadmin_password: String,

    /// Run database migrations and exit.
    #[clap(long, env, default_value_t = false)]
    pub migrate: bool,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
