use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use peopledesk_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub login_path: String,
    pub fallback_path: String,
    pub navigation_menu_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match lookup("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3002,
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let login_path = redirect_path(&lookup, "ACCESS_LOGIN_PATH", "/login")?;
        let fallback_path = redirect_path(&lookup, "ACCESS_FALLBACK_PATH", "/unauthorized")?;

        let navigation_menu_path = lookup("NAVIGATION_MENU_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            login_path,
            fallback_path,
            navigation_menu_path,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn redirect_path<F>(lookup: &F, name: &str, default: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).unwrap_or_else(|| default.to_owned());
    let trimmed = value.trim();
    if !trimmed.starts_with('/') {
        return Err(AppError::Validation(format!(
            "{name} must be an absolute path starting with '/', got '{value}'"
        )));
    }

    Ok(trimmed.to_owned())
}
