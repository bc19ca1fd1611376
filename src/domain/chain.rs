//! Chain display metadata.
//!
//! The registry maps a chain id to the name and logo shown next to a
//! transfer. It is loaded once and only read afterwards. A lookup miss is not
//! an error: [`ChainRegistry::resolve`] falls back to the raw chain id.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

// ============================================================================
// Metadata
// ============================================================================

/// Name and logo shown for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainMetadata {
    pub pretty_name: String,
    pub logo_ref: Option<String>,
}

/// Logo URIs in chain-registry format.
#[derive(Debug, Clone, Default, Deserialize)]
struct LogoUris {
    svg: Option<String>,
    png: Option<String>,
}

/// One registry entry as it appears in chain-registry JSON.
#[derive(Debug, Clone, Deserialize)]
struct ChainEntry {
    pretty_name: String,
    #[serde(rename = "logo_URIs", default)]
    logo_uris: LogoUris,
}

impl From<ChainEntry> for ChainMetadata {
    fn from(entry: ChainEntry) -> Self {
        Self {
            pretty_name: entry.pretty_name,
            logo_ref: entry.logo_uris.svg.or(entry.logo_uris.png),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

const BUILTIN_CHAINS: &[(&str, &str, Option<&str>)] = &[
    ("sidechain", "Cardano Sidechain", None),
    (
        "osmosis-1",
        "Osmosis",
        Some("https://raw.githubusercontent.com/cosmos/chain-registry/master/osmosis/images/osmo.svg"),
    ),
    (
        "osmo-test-5",
        "Osmosis Testnet",
        Some("https://raw.githubusercontent.com/cosmos/chain-registry/master/osmosis/images/osmo.svg"),
    ),
    ("localosmosis", "Local Osmosis", None),
    (
        "cosmoshub-4",
        "Cosmos Hub",
        Some("https://raw.githubusercontent.com/cosmos/chain-registry/master/cosmoshub/images/atom.svg"),
    ),
];

static BUILTIN: LazyLock<ChainRegistry> = LazyLock::new(|| {
    BUILTIN_CHAINS
        .iter()
        .map(|&(id, name, logo)| {
            (
                id.to_string(),
                ChainMetadata {
                    pretty_name: name.to_string(),
                    logo_ref: logo.map(str::to_string),
                },
            )
        })
        .collect()
});

/// Read-only table of chain display metadata keyed by chain id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: HashMap<String, ChainMetadata>,
}

impl ChainRegistry {
    /// The registry compiled into the crate.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse a registry from chain-registry JSON: an object keyed by chain id
    /// whose values carry `pretty_name` and optional `logo_URIs`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if the JSON does not have that shape.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: HashMap<String, ChainEntry> = serde_json::from_str(json)?;
        Ok(entries
            .into_iter()
            .map(|(id, entry)| (id, ChainMetadata::from(entry)))
            .collect())
    }

    /// Read and parse a registry file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, or
    /// [`RegistryError::Parse`] if its contents are not registry JSON.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&content)?;
        tracing::debug!("Loaded {} chains from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn lookup(&self, chain_id: &str) -> Option<&ChainMetadata> {
        self.chains.get(chain_id)
    }

    /// Metadata for `chain_id`, or the id itself with no logo if unknown.
    /// A known chain with an empty `pretty_name` is shown by its id.
    #[must_use]
    pub fn resolve(&self, chain_id: &str) -> ChainMetadata {
        match self.lookup(chain_id) {
            Some(meta) if !meta.pretty_name.is_empty() => meta.clone(),
            Some(meta) => {
                tracing::debug!("Chain '{chain_id}' has an empty name, using id as name");
                ChainMetadata {
                    pretty_name: chain_id.to_string(),
                    logo_ref: meta.logo_ref.clone(),
                }
            }
            None => {
                tracing::debug!("Chain '{chain_id}' not in registry, using id as name");
                ChainMetadata {
                    pretty_name: chain_id.to_string(),
                    logo_ref: None,
                }
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl FromIterator<(String, ChainMetadata)> for ChainRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ChainMetadata)>>(iter: I) -> Self {
        Self {
            chains: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const REGISTRY_JSON: &str = r#"{
        "osmosis-1": {
            "pretty_name": "Osmosis",
            "logo_URIs": { "png": "https://x/osmo.png", "svg": "https://x/osmo.svg" }
        },
        "png-only": {
            "pretty_name": "Png Chain",
            "logo_URIs": { "png": "https://x/p.png" }
        },
        "no-logo": { "pretty_name": "Bare Chain" },
        "nameless-1": {
            "pretty_name": "",
            "logo_URIs": { "png": "https://x/n.png" }
        }
    }"#;

    #[rstest]
    #[case::prefers_svg("osmosis-1", "Osmosis", Some("https://x/osmo.svg"))]
    #[case::falls_back_to_png("png-only", "Png Chain", Some("https://x/p.png"))]
    #[case::no_logo("no-logo", "Bare Chain", None)]
    #[case::empty_name_uses_id("nameless-1", "nameless-1", Some("https://x/n.png"))]
    fn test_from_json(#[case] id: &str, #[case] name: &str, #[case] logo: Option<&str>) {
        let registry = ChainRegistry::from_json(REGISTRY_JSON).unwrap();
        assert_eq!(registry.len(), 4);

        let meta = registry.resolve(id);
        assert_eq!(meta.pretty_name, name);
        assert_eq!(meta.logo_ref.as_deref(), logo);
    }

    #[rstest]
    #[case::unknown("channel-7")]
    #[case::empty("")]
    #[case::case_differs("OSMOSIS-1")]
    #[case::prefix_only("osmosis")]
    fn test_resolve_unknown_falls_back_to_id(#[case] id: &str) {
        let registry = ChainRegistry::from_json(REGISTRY_JSON).unwrap();
        assert!(registry.lookup(id).is_none());

        let meta = registry.resolve(id);
        assert_eq!(meta.pretty_name, id);
        assert!(meta.logo_ref.is_none());
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        assert!(matches!(
            ChainRegistry::from_json(r#"{"x": {"name": "missing pretty_name"}}"#),
            Err(RegistryError::Parse(_))
        ));
        assert!(ChainRegistry::from_json("[]").is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let result = ChainRegistry::from_file(Path::new("/nonexistent/chains.json"));
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ChainRegistry::builtin();
        assert!(!registry.is_empty());
        assert_eq!(registry.resolve("osmosis-1").pretty_name, "Osmosis");
        assert!(registry.resolve("osmosis-1").logo_ref.is_some());
        assert_eq!(registry.resolve("sidechain").logo_ref, None);
    }

    #[test]
    fn test_empty_registry_resolves_everything() {
        let registry = ChainRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("anything").pretty_name, "anything");
    }
}
