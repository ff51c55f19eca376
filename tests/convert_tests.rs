//! Tests for engine listing and status conversion.
//!
//! Covers status classification, container/image adaptation and the
//! reporting projection through the public crate API.

use chrono::{TimeZone, Utc};
use r_kubelet::api::types::{ContainerState, ContainerStateWaiting};
use r_kubelet::{
    ContainerEntry, ContainerId, ContainerStatus, ConvertError, DOCKER_SCHEME, DockerId, ImageEntry,
    KubeletContainerName, KubeletNameParser, NameParseError, NameParser, RawContainerStatus,
    map_status, raw_to_api_container_status, to_runtime_container, to_runtime_containers,
    to_runtime_image, to_runtime_images,
};

fn managed_entry(id: &str, status: &str) -> ContainerEntry {
    ContainerEntry {
        id: id.to_string(),
        names: vec![format!("/k8s_app.deadbeef_api-0_prod_{id}-uid_7f3a")],
        image: "registry.local/api:2.1".to_string(),
        created: 1_714_557_600,
        status: status.to_string(),
    }
}

fn raw_status(status: ContainerStatus) -> RawContainerStatus {
    RawContainerStatus {
        id: "9a8b7c6d5e4f".to_string(),
        name: "app".to_string(),
        restart_count: 2,
        image: "registry.local/api:2.1".to_string(),
        image_id: "docker://sha256:77aa".to_string(),
        status,
        started_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
        finished_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()),
        exit_code: 1,
        reason: "Error".to_string(),
        message: "panic: config missing".to_string(),
    }
}

// =============================================================================
// Status Classification
// =============================================================================

#[test]
fn test_classify_known_prefixes() {
    assert_eq!(map_status("Up 5 minutes"), ContainerStatus::Running);
    assert_eq!(map_status("Exited (0) 2 hours ago"), ContainerStatus::Exited);
}

#[test]
fn test_classify_defaults_to_unknown() {
    assert_eq!(map_status("Created"), ContainerStatus::Unknown);
    assert_eq!(map_status(""), ContainerStatus::Unknown);
    assert_eq!(map_status("Paused"), ContainerStatus::Unknown);
}

#[test]
fn test_classify_is_total_over_odd_input() {
    let long = "x".repeat(64 * 1024);
    for text in ["\0", "\u{1F600}", "Up\nExited", long.as_str(), "  "] {
        let status = map_status(text);
        assert!(matches!(
            status,
            ContainerStatus::Running | ContainerStatus::Exited | ContainerStatus::Unknown
        ));
    }
}

// =============================================================================
// Container Adaptation
// =============================================================================

#[test]
fn test_container_preserves_engine_fields() {
    let entry = managed_entry("9a8b7c6d5e4f", "Exited (2) 10 minutes ago");
    let container = to_runtime_container(Some(&entry), &KubeletNameParser).unwrap();

    assert_eq!(container.id.id, entry.id);
    assert_eq!(container.image, entry.image);
    assert_eq!(container.created, entry.created);
    assert_eq!(container.status, map_status(&entry.status));
    assert_eq!(container.name, "app");
    assert_eq!(container.hash, 0xdeadbeef);
}

#[test]
fn test_container_id_is_qualified_and_routable() {
    let entry = managed_entry("9a8b7c6d5e4f", "Up 1 hour");
    let container = to_runtime_container(Some(&entry), &KubeletNameParser).unwrap();

    let rendered = container.id.to_string();
    assert!(rendered.starts_with(&format!("{DOCKER_SCHEME}://")));
    assert_eq!(ContainerId::parse(&rendered).unwrap(), container.id);
}

#[test]
fn test_container_missing_entry_is_invalid_input() {
    let err = to_runtime_container(None, &KubeletNameParser).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInput(_)));
    assert!(err.to_string().contains("invalid input"));
}

#[test]
fn test_container_uses_custom_parser() {
    struct FixedParser;

    impl NameParser for FixedParser {
        fn parse(&self, _raw_name: &str) -> Result<(KubeletContainerName, u32), NameParseError> {
            Ok((
                KubeletContainerName {
                    pod_full_name: "p_ns".to_string(),
                    pod_uid: "uid".to_string(),
                    container_name: "fixed".to_string(),
                },
                7,
            ))
        }
    }

    let entry = ContainerEntry {
        names: vec!["/anything".to_string()],
        ..managed_entry("abc", "Up")
    };
    let parser: &dyn NameParser = &FixedParser;
    let container = to_runtime_container(Some(&entry), parser).unwrap();

    assert_eq!(container.name, "fixed");
    assert_eq!(container.hash, 7);
}

#[test]
fn test_container_name_error_propagates() {
    let entry = ContainerEntry {
        names: vec!["/k8s_short".to_string()],
        ..managed_entry("abc", "Up")
    };
    let err = to_runtime_container(Some(&entry), &KubeletNameParser).unwrap_err();

    assert!(matches!(
        err,
        ConvertError::NameParse(NameParseError::TooFewFields { fields: 2, .. })
    ));
}

#[test]
fn test_container_conversion_is_deterministic() {
    let entry = managed_entry("9a8b7c6d5e4f", "Up 5 minutes");
    let first = to_runtime_container(Some(&entry), &KubeletNameParser).unwrap();
    let second = to_runtime_container(Some(&entry), &KubeletNameParser).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_container_batch_keeps_order_and_skips_failures() {
    let entries = vec![
        managed_entry("c1", "Up 1 minute"),
        ContainerEntry::default(),
        managed_entry("c2", "Created"),
    ];
    let containers = to_runtime_containers(&entries, &KubeletNameParser);

    let ids: Vec<_> = containers.iter().map(|c| c.id.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert_eq!(containers[1].status, ContainerStatus::Unknown);
}

#[test]
fn test_container_from_engine_json() {
    let entries: Vec<ContainerEntry> = serde_json::from_str(
        r#"[
            {"Id": "e90e34656806", "Names": ["/k8s_db.0a0b_pg-0_data_u1_aa"],
             "Image": "postgres:16", "Created": 1367854154, "Status": "Exited (0) 3 days ago"}
        ]"#,
    )
    .unwrap();
    let containers = to_runtime_containers(&entries, &KubeletNameParser);

    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].name, "db");
    assert_eq!(containers[0].hash, 0x0a0b);
    assert_eq!(containers[0].status, ContainerStatus::Exited);
}

// =============================================================================
// Image Adaptation
// =============================================================================

#[test]
fn test_image_pass_through() {
    let entry = ImageEntry {
        id: "sha256:8dbd".to_string(),
        repo_tags: vec!["b:2".to_string(), "a:1".to_string(), "<none>:<none>".to_string()],
        virtual_size: -1,
    };
    let image = to_runtime_image(Some(&entry)).unwrap();

    assert_eq!(image.id, entry.id);
    assert_eq!(image.tags, entry.repo_tags);
    assert_eq!(image.size, -1);
}

#[test]
fn test_image_missing_entry_is_invalid_input() {
    assert!(matches!(
        to_runtime_image(None),
        Err(ConvertError::InvalidInput(_))
    ));
}

#[test]
fn test_image_batch_matches_single() {
    let entries = vec![
        ImageEntry {
            id: "sha256:1".to_string(),
            ..Default::default()
        },
        ImageEntry {
            id: "sha256:2".to_string(),
            repo_tags: vec!["x:1".to_string()],
            virtual_size: 9,
        },
    ];
    let images = to_runtime_images(&entries);

    assert_eq!(images.len(), 2);
    for (entry, image) in entries.iter().zip(&images) {
        assert_eq!(&to_runtime_image(Some(entry)).unwrap(), image);
    }
}

// =============================================================================
// Status Projection
// =============================================================================

#[test]
fn test_projection_running() {
    let raw = raw_status(ContainerStatus::Running);
    let status = raw_to_api_container_status(&raw);

    match &status.state {
        ContainerState::Running(running) => assert_eq!(running.started_at, raw.started_at),
        other => panic!("expected running, got {other:?}"),
    }
    assert_eq!(status.name, raw.name);
    assert_eq!(status.restart_count, raw.restart_count);
    assert_eq!(status.image, raw.image);
    assert_eq!(status.image_id, raw.image_id);
}

#[test]
fn test_projection_exited_is_terminated() {
    let raw = raw_status(ContainerStatus::Exited);
    let status = raw_to_api_container_status(&raw);

    assert_eq!(
        status.container_id,
        DockerId(raw.id.clone()).container_id().to_string()
    );
    match status.state {
        ContainerState::Terminated(terminated) => {
            assert_eq!(terminated.exit_code, raw.exit_code);
            assert_eq!(terminated.reason, raw.reason);
            assert_eq!(terminated.message, raw.message);
            assert_eq!(terminated.finished_at, raw.finished_at);
            assert!(terminated.container_id.ends_with(&raw.id));
        }
        other => panic!("expected terminated, got {other:?}"),
    }
}

#[test]
fn test_projection_unknown_is_waiting() {
    let status = raw_to_api_container_status(&raw_status(ContainerStatus::Unknown));
    assert_eq!(status.state, ContainerState::Waiting(ContainerStateWaiting {}));
}

#[test]
fn test_projection_json_shape() {
    let status = raw_to_api_container_status(&raw_status(ContainerStatus::Exited));
    let json = serde_json::to_value(&status).unwrap();

    let state = json["state"].as_object().unwrap();
    assert_eq!(state.len(), 1, "exactly one state variant");
    assert_eq!(json["state"]["terminated"]["exitCode"], 1);
    assert_eq!(
        json["state"]["terminated"]["containerID"],
        "docker://9a8b7c6d5e4f"
    );
}

#[test]
fn test_projection_is_deterministic() {
    let raw = raw_status(ContainerStatus::Running);
    assert_eq!(
        raw_to_api_container_status(&raw),
        raw_to_api_container_status(&raw)
    );
}
