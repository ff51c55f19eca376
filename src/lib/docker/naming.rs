use log::warn;

use super::types::NameParseError;

const CONTAINER_NAME_PREFIX: &str = "k8s";
const MIN_NAME_FIELDS: usize = 6;

/// What the node agent encodes into an engine container name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubeletContainerName {
    pub pod_full_name: String,
    pub pod_uid: String,
    pub container_name: String,
}

/// Recovers the logical container name and its spec hash from the name the
/// engine reports.
pub trait NameParser {
    fn parse(&self, raw_name: &str) -> Result<(KubeletContainerName, u32), NameParseError>;
}

/// Parser for `k8s_<container>[.<hash>]_<pod>_<namespace>_<uid>_<random>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeletNameParser;

impl NameParser for KubeletNameParser {
    fn parse(&self, raw_name: &str) -> Result<(KubeletContainerName, u32), NameParseError> {
        let name = raw_name.strip_prefix('/').unwrap_or(raw_name);
        let parts: Vec<&str> = name.split('_').collect();

        if parts[0] != CONTAINER_NAME_PREFIX {
            return Err(NameParseError::NotManaged {
                name: name.to_string(),
            });
        }
        if parts.len() < MIN_NAME_FIELDS {
            warn!(name = name, fields = parts.len(); "container has the k8s prefix but too few fields");
            return Err(NameParseError::TooFewFields {
                name: name.to_string(),
                fields: parts.len(),
            });
        }

        let mut name_parts = parts[1].split('.');
        let container_name = name_parts.next().unwrap_or_default();
        let hash = name_parts.next().map_or(0, |hash_hex| parse_hash(name, hash_hex));

        Ok((
            KubeletContainerName {
                pod_full_name: format!("{}_{}", parts[2], parts[3]),
                pod_uid: parts[4].to_string(),
                container_name: container_name.to_string(),
            },
            hash,
        ))
    }
}

/// Hex hash bounded to 32 bits. Bad digits give 0 and an out-of-range value
/// saturates to `u32::MAX`; neither fails the parse.
fn parse_hash(name: &str, hash_hex: &str) -> u32 {
    if hash_hex.is_empty() || !hash_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        warn!(name = name, hash = hash_hex; "invalid container hash, using 0");
        return 0;
    }
    u32::from_str_radix(hash_hex, 16).unwrap_or_else(|_| {
        warn!(name = name, hash = hash_hex; "container hash out of range");
        u32::MAX
    })
}
