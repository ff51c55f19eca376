use std::future::Future;

use bollard::{
    API_DEFAULT_VERSION, Docker,
    container::ListContainersOptions,
    image::ListImagesOptions,
    models::{ContainerSummary, ImageSummary},
};
use log::debug;

use super::types::{ContainerEntry, EngineResult, ImageEntry};

/// Source of raw listings. Conversion never calls this; the node server does.
pub trait ContainerEngine: Send + Sync + 'static {
    fn list_containers(&self) -> impl Future<Output = EngineResult<Vec<ContainerEntry>>> + Send;

    fn list_images(&self) -> impl Future<Output = EngineResult<Vec<ImageEntry>>> + Send;
}

#[derive(Debug, Clone)]
pub struct DockerEngine {
    pub client: Docker,
}

impl DockerEngine {
    pub fn connect(socket: &str, timeout_secs: u64) -> EngineResult<Self> {
        let client = Docker::connect_with_unix(socket, timeout_secs, API_DEFAULT_VERSION)?;
        debug!(socket = socket; "connected to docker engine");

        Ok(DockerEngine { client })
    }
}

impl ContainerEngine for DockerEngine {
    async fn list_containers(&self) -> EngineResult<Vec<ContainerEntry>> {
        let summaries = self
            .client
            .list_containers(Some(ListContainersOptions::<String> {
                all: true,
                ..Default::default()
            }))
            .await?;
        debug!(count = summaries.len(); "listed containers");

        Ok(summaries.into_iter().map(ContainerEntry::from).collect())
    }

    async fn list_images(&self) -> EngineResult<Vec<ImageEntry>> {
        let summaries = self.client.list_images(Some(list_images_options())).await?;
        debug!(count = summaries.len(); "listed images");

        Ok(summaries.into_iter().map(ImageEntry::from).collect())
    }
}

/// Top-level images only. Untagged (dangling) images are still listed so the
/// node reports everything that occupies disk.
fn list_images_options() -> ListImagesOptions<String> {
    ListImagesOptions {
        all: false,
        ..Default::default()
    }
}

impl From<ContainerSummary> for ContainerEntry {
    fn from(value: ContainerSummary) -> Self {
        ContainerEntry {
            id: value.id.unwrap_or_default(),
            names: value.names.unwrap_or_default(),
            image: value.image.unwrap_or_default(),
            created: value.created.unwrap_or_default(),
            status: value.status.unwrap_or_default(),
        }
    }
}

impl From<ImageSummary> for ImageEntry {
    fn from(value: ImageSummary) -> Self {
        ImageEntry {
            id: value.id,
            repo_tags: value.repo_tags,
            // newer engines stopped sending VirtualSize; Size carries the same number there
            virtual_size: value.virtual_size.unwrap_or(value.size),
        }
    }
}
