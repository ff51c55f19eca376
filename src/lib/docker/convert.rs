// Helpers converting docker engine listings to runtime types and runtime
// status to the reporting api.

use log::{debug, warn};

use super::naming::{KubeletContainerName, NameParser};
use super::types::{ContainerEntry, DockerId, ImageEntry, NameParseError};
use crate::api::types::{
    ContainerState, ContainerStateRunning, ContainerStateTerminated, ContainerStateWaiting,
    ContainerStatus as ApiContainerStatus,
};
use crate::container::state::map_status;
use crate::container::types::{
    Container, ContainerStatus, ConvertError, ConvertResult, Image, RawContainerStatus,
};

fn container_name_info<P>(
    c: &ContainerEntry,
    parser: &P,
) -> Result<(KubeletContainerName, u32), NameParseError>
where
    P: NameParser + ?Sized,
{
    let raw_name = c.names.first().ok_or(NameParseError::EmptyName)?;
    parser.parse(raw_name)
}

pub fn to_runtime_container<P>(c: Option<&ContainerEntry>, parser: &P) -> ConvertResult<Container>
where
    P: NameParser + ?Sized,
{
    let c = c.ok_or_else(|| {
        ConvertError::InvalidInput("unable to convert a missing entry to a runtime container".to_string())
    })?;
    if c.id.is_empty() {
        return Err(ConvertError::InvalidInput(
            "unable to convert an entry with an empty id to a runtime container".to_string(),
        ));
    }

    let (docker_name, hash) = container_name_info(c, parser)?;

    Ok(Container {
        id: DockerId(c.id.clone()).container_id(),
        name: docker_name.container_name,
        image: c.image.clone(),
        hash,
        created: c.created,
        status: map_status(&c.status),
    })
}

pub fn to_runtime_image(image: Option<&ImageEntry>) -> ConvertResult<Image> {
    let image = image.ok_or_else(|| {
        ConvertError::InvalidInput("unable to convert a missing entry to a runtime image".to_string())
    })?;

    Ok(image_from_entry(image))
}

fn image_from_entry(image: &ImageEntry) -> Image {
    Image {
        id: image.id.clone(),
        tags: image.repo_tags.clone(),
        size: image.virtual_size,
    }
}

/// Converts a whole listing, dropping entries that are not ours or can't be
/// read so the rest of the node still gets reported.
pub fn to_runtime_containers<P>(entries: &[ContainerEntry], parser: &P) -> Vec<Container>
where
    P: NameParser + ?Sized,
{
    entries
        .iter()
        .filter_map(|entry| match to_runtime_container(Some(entry), parser) {
            Ok(container) => Some(container),
            Err(err) => {
                warn!(id = entry.id.as_str(), error:% = err; "skipping container");
                None
            }
        })
        .collect()
}

pub fn to_runtime_images(entries: &[ImageEntry]) -> Vec<Image> {
    entries.iter().map(image_from_entry).collect()
}

pub fn raw_to_api_container_status(raw: &RawContainerStatus) -> ApiContainerStatus {
    let container_id = DockerId(raw.id.clone()).container_id().to_string();

    let state = match raw.status {
        ContainerStatus::Running => ContainerState::Running(ContainerStateRunning {
            started_at: raw.started_at,
        }),
        ContainerStatus::Exited => ContainerState::Terminated(ContainerStateTerminated {
            exit_code: raw.exit_code,
            reason: raw.reason.clone(),
            message: raw.message.clone(),
            started_at: raw.started_at,
            finished_at: raw.finished_at,
            container_id: container_id.clone(),
        }),
        ContainerStatus::Unknown => ContainerState::Waiting(ContainerStateWaiting {}),
    };
    debug!(container = container_id.as_str(), state = state.name(); "projected container status");

    ApiContainerStatus {
        name: raw.name.clone(),
        restart_count: raw.restart_count,
        image: raw.image.clone(),
        image_id: raw.image_id.clone(),
        container_id,
        state,
    }
}
