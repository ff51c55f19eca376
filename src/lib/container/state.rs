use super::types::ContainerStatus;

/// Classifies the engine's human-readable status column.
///
/// The text is not a stable format across engine versions, so only the two
/// prefixes known to be stable are trusted; everything else is `Unknown`.
pub fn map_status(status: &str) -> ContainerStatus {
    if status.starts_with("Up") {
        ContainerStatus::Running
    } else if status.starts_with("Exited") {
        ContainerStatus::Exited
    } else {
        ContainerStatus::Unknown
    }
}
