//! Label catalog loaded from a JSON language file.

use std::collections::HashMap;
use std::path::Path;

use axismundi_domain::Localizer;
use serde_json::Value;

use crate::infrastructure::ports::RepoError;

/// Localizer backed by a JSON label map.
///
/// Accepts flat files (`{"AXISMUNDIRPG.AbilityStr": "Fuerza"}`) as well as
/// nested ones (`{"AXISMUNDIRPG": {"AbilityStr": "Fuerza"}}`); nested keys
/// are joined with dots.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    labels: HashMap<String, String>,
}

impl CatalogLocalizer {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RepoError> {
        let value: Value = serde_json::from_str(raw).map_err(RepoError::serialization)?;
        let Value::Object(root) = value else {
            return Err(RepoError::serialization("label catalog must be a JSON object"));
        };
        let mut labels = HashMap::new();
        for (key, value) in root {
            flatten_into(&mut labels, key, value);
        }
        Ok(Self { labels })
    }

    pub fn load(path: &Path) -> Result<Self, RepoError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RepoError::storage("load labels", format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            labels = catalog.len(),
            "Loaded label catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn flatten_into(labels: &mut HashMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::String(text) => {
            labels.insert(prefix, text);
        }
        Value::Object(children) => {
            for (key, child) in children {
                flatten_into(labels, format!("{prefix}.{key}"), child);
            }
        }
        // Numbers, arrays and nulls are not labels
        _ => {}
    }
}

impl Localizer for CatalogLocalizer {
    fn localize(&self, key: &str) -> Option<String> {
        let label = self.labels.get(key).cloned();
        if label.is_none() {
            tracing::warn!(key, "Unresolved label");
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_nested_catalogs_resolve_the_same_keys() {
        let flat = CatalogLocalizer::from_json_str(r#"{"AXISMUNDIRPG.AbilityStr": "Fuerza"}"#)
            .expect("flat catalog");
        let nested = CatalogLocalizer::from_json_str(
            r#"{"AXISMUNDIRPG": {"AbilityStr": "Fuerza", "Max": 3}}"#,
        )
        .expect("nested catalog");
        assert_eq!(flat.localize("AXISMUNDIRPG.AbilityStr").as_deref(), Some("Fuerza"));
        assert_eq!(nested.localize("AXISMUNDIRPG.AbilityStr").as_deref(), Some("Fuerza"));
        assert_eq!(nested.len(), 1);
    }

    #[test]
    fn unknown_keys_fall_back() {
        let catalog = CatalogLocalizer::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.label("AXISMUNDIRPG.Gold", "gp"), "gp");
    }

    #[test]
    fn non_object_catalog_is_rejected() {
        assert!(matches!(
            CatalogLocalizer::from_json_str("[1, 2]"),
            Err(RepoError::Serialization(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("es.json");
        std::fs::write(&path, r#"{"AXISMUNDIRPG": {"Gold": "Oro"}}"#).expect("write fixture");
        let catalog = CatalogLocalizer::load(&path).expect("load");
        assert_eq!(catalog.label("AXISMUNDIRPG.Gold", "gp"), "Oro");
    }
}
