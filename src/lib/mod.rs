//! Node-agent side adaptation of container engine data.
//!
//! Engine listings (`docker::types`) are turned into runtime records
//! (`container::types`) and detailed runtime status into the reported api
//! status (`api::types`). Conversion is pure; talking to the engine and
//! serving the results lives in `docker::engine` and `worker`.

pub mod api;
pub mod container;
pub mod docker;
pub mod logging;
pub mod worker;

pub use container::state::map_status;
pub use container::types::{
    Container, ContainerId, ContainerStatus, ConvertError, ConvertResult, Image,
    RawContainerStatus,
};
pub use docker::convert::{
    raw_to_api_container_status, to_runtime_container, to_runtime_containers, to_runtime_image,
    to_runtime_images,
};
pub use docker::naming::{KubeletContainerName, KubeletNameParser, NameParser};
pub use docker::types::{ContainerEntry, DOCKER_SCHEME, DockerId, ImageEntry, NameParseError};
