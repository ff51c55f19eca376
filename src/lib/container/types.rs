use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::docker::types::NameParseError;

/// Lifecycle state of a container as far as the node agent can tell.
///
/// Anything the engine reports that is not clearly running or exited is
/// `Unknown`, which callers treat as "look again later".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    Running,
    Exited,
    Unknown,
}

impl ContainerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::Running => "running",
            ContainerStatus::Exited => "exited",
            ContainerStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine-qualified container identifier, rendered as `<type>://<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: String,
}

impl ContainerId {
    pub fn parse(qualified: &str) -> Result<Self, ConvertError> {
        match qualified.split_once("://") {
            Some((type_, id)) if !type_.is_empty() && !id.is_empty() => Ok(ContainerId {
                type_: type_.to_string(),
                id: id.to_string(),
            }),
            _ => Err(ConvertError::InvalidContainerId(qualified.to_string())),
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.type_, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub name: String,
    pub image: String,
    pub hash: u32,
    /// Unix seconds, exactly as the engine reported them.
    pub created: i64,
    pub status: ContainerStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub tags: Vec<String>,
    /// Engine-reported size in bytes. Passed through untouched, may be approximate.
    pub size: i64,
}

/// Detailed status of a single container after inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContainerStatus {
    /// Bare engine id, not yet qualified.
    pub id: String,
    pub name: String,
    pub restart_count: i32,
    pub image: String,
    pub image_id: String,
    pub status: ContainerStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub exit_code: i32,
    pub reason: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    NameParse(#[from] NameParseError),

    #[error("invalid container id {0:?}, expected <type>://<id>")]
    InvalidContainerId(String),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
