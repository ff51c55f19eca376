use serde::{Deserialize, Serialize};

use crate::container::types::ContainerId;

pub const DOCKER_SCHEME: &str = "docker";

/// Entry from the engine's container listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEntry {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Names", default)]
    pub names: Vec<String>,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Created", default)]
    pub created: i64,
    #[serde(rename = "Status", default)]
    pub status: String,
}

/// Entry from the engine's image listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "RepoTags", default)]
    pub repo_tags: Vec<String>,
    #[serde(rename = "VirtualSize", default)]
    pub virtual_size: i64,
}

/// Bare id as handed out by the docker engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DockerId(pub String);

impl DockerId {
    /// The one place a docker id gets its scheme; everything that routes a
    /// `ContainerId` back to this engine relies on this shape.
    pub fn container_id(&self) -> ContainerId {
        ContainerId {
            type_: DOCKER_SCHEME.to_string(),
            id: self.0.clone(),
        }
    }
}

impl From<&str> for DockerId {
    fn from(id: &str) -> Self {
        DockerId(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameParseError {
    #[error("cannot parse empty docker container name")]
    EmptyName,

    #[error("failed to parse docker container name {name:?} into parts")]
    NotManaged { name: String },

    #[error("docker container name {name:?} has {fields} fields, expected at least 6")]
    TooFewFields { name: String, fields: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("docker engine error: {0}")]
    Docker(#[from] bollard::errors::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
