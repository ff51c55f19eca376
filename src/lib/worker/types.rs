use std::{env, path::PathBuf, str::FromStr, sync::Arc};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::LevelFilter;

use crate::docker::{naming::KubeletNameParser, types::EngineError};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub address: String,
    pub port: String,
    pub docker_socket: String,
    pub engine_timeout_secs: u64,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: "localhost".to_string(),
            port: "8080".to_string(),
            docker_socket: "/var/run/docker.sock".to_string(),
            engine_timeout_secs: 120,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `R_KUBELET_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(address) = lookup("R_KUBELET_ADDRESS") {
            config.address = address;
        }
        if let Some(port) = lookup("R_KUBELET_PORT") {
            config.port = port;
        }
        if let Some(socket) = lookup("R_KUBELET_DOCKER_SOCKET") {
            config.docker_socket = socket;
        }
        if let Some(timeout) = parsed(&lookup, "R_KUBELET_ENGINE_TIMEOUT") {
            config.engine_timeout_secs = timeout;
        }
        if let Some(level) = parsed(&lookup, "R_KUBELET_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(file) = lookup("R_KUBELET_LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }
}

// The logger isn't up yet while config loads, so bad values go to stderr.
fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("ignoring invalid {}={:?}, keeping default", key, raw);
            None
        }
    }
}

pub struct NodeServer<E> {
    pub engine: Arc<E>,
    pub parser: KubeletNameParser,
    pub address: String,
    pub port: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        let status = match self {
            WorkerError::Engine(_) => StatusCode::BAD_GATEWAY,
            WorkerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

pub type WorkerResult<T> = Result<T, WorkerError>;
