use crate::error::{MigrateError, Result};
use crate::models::Properties;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Renaming rules for one observed node label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelMapping {
    /// Label to write instead of the observed one; `None` keeps it as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,
    /// Property key renames, applied in declaration order.
    #[serde(default)]
    pub property_mappings: IndexMap<String, String>,
}

/// Renaming rules for one observed relationship type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default)]
    pub property_mappings: IndexMap<String, String>,
}

/// Operator-supplied renaming rules for labels, relationship types, and
/// property keys.
///
/// Every field defaults to empty, and an absent entry means identity
/// mapping, so an empty file (or no file at all) behaves exactly like a
/// generated template. Loaded once before the load phase and immutable for
/// the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub node_labels: BTreeMap<String, LabelMapping>,
    #[serde(default)]
    pub relationship_types: BTreeMap<String, TypeMapping>,
    /// Reserved for value-level transformations; carried through untouched.
    #[serde(default)]
    pub property_transformations: serde_json::Map<String, serde_json::Value>,
}

impl MappingConfig {
    /// Load a mapping configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| MigrateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MappingConfig =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                MigrateError::Config {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        info!(path = %path.display(), "Loaded mapping configuration");
        Ok(config)
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| MigrateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|source| {
            MigrateError::Config {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(())
    }

    /// Target label for an observed node label (identity if unmapped).
    pub fn node_label<'a>(&'a self, observed: &'a str) -> &'a str {
        self.node_labels
            .get(observed)
            .and_then(|m| m.target_label.as_deref())
            .unwrap_or(observed)
    }

    /// Target type for an observed relationship type (identity if unmapped).
    pub fn relationship_type<'a>(&'a self, observed: &'a str) -> &'a str {
        self.relationship_types
            .get(observed)
            .and_then(|m| m.target_type.as_deref())
            .unwrap_or(observed)
    }

    /// Property renames configured for an observed node label.
    pub fn node_property_renames(&self, observed: &str) -> Option<&IndexMap<String, String>> {
        self.node_labels
            .get(observed)
            .map(|m| &m.property_mappings)
            .filter(|m| !m.is_empty())
    }

    /// Property renames configured for an observed relationship type.
    pub fn relationship_property_renames(
        &self,
        observed: &str,
    ) -> Option<&IndexMap<String, String>> {
        self.relationship_types
            .get(observed)
            .map(|m| &m.property_mappings)
            .filter(|m| !m.is_empty())
    }
}

/// Apply key renames to a property map: the old key is removed and the new
/// key inserted with the same value, in rename-table order. Two old keys
/// mapping to the same new key resolve last-write-wins.
pub fn apply_property_renames(properties: &mut Properties, renames: &IndexMap<String, String>) {
    for (old_key, new_key) in renames {
        if let Some(value) = properties.shift_remove(old_key) {
            properties.insert(new_key.clone(), value);
        }
    }
}
