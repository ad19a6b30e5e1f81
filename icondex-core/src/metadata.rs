//! Per-folder metadata descriptor parsing

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// The fields of `metadata.json` the index cares about. Other keys are ignored.
///
/// Values are carried through as written: `name` defaults to `null` and
/// `metaphor` to `[]` only when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMetadata {
    pub name: Value,
    pub metaphor: Value,
}

impl Default for IconMetadata {
    fn default() -> Self {
        Self {
            name: Value::Null,
            metaphor: Value::Array(Vec::new()),
        }
    }
}

impl IconMetadata {
    /// Parse a descriptor. Anything but a JSON object is rejected.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let doc: Value = serde_json::from_slice(bytes)?;
        let Value::Object(mut fields) = doc else {
            return Err(anyhow!("metadata is not a JSON object"));
        };

        let defaults = Self::default();
        Ok(Self {
            name: fields.remove("name").unwrap_or(defaults.name),
            metaphor: fields.remove("metaphor").unwrap_or(defaults.metaphor),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::IconMetadata;
    use serde_json::json;

    #[test]
    fn absent_fields_default_to_empty() {
        let meta = IconMetadata::from_json(br#"{"size":[16,24]}"#).expect("parse");
        assert_eq!(meta, IconMetadata::default());
        assert_eq!(meta.metaphor, json!([]));
    }

    #[test]
    fn present_values_pass_through_unchanged() {
        let meta =
            IconMetadata::from_json(br#"{"name":42,"metaphor":null}"#).expect("parse");
        assert_eq!(meta.name, json!(42));
        assert_eq!(meta.metaphor, json!(null));

        let meta = IconMetadata::from_json(br#"{"name":{"z":1,"a":2},"metaphor":"single"}"#)
            .expect("parse");
        assert_eq!(meta.metaphor, json!("single"));
        assert_eq!(serde_json::to_string(&meta.name).unwrap(), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(IconMetadata::from_json(b"[1,2,3]").is_err());
        assert!(IconMetadata::from_json(b"[]").is_err());
        assert!(IconMetadata::from_json(b"\"name\"").is_err());
        assert!(IconMetadata::from_json(b"{not json").is_err());
    }
}
