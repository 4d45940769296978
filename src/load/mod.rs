//! Load phase: dialect text → value tree.

pub mod tags;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::LoadError;

/// Parse a pipeline document into a tag-free value tree.
///
/// Returns `Ok(None)` when the document holds no content.
pub fn load(text: &str) -> Result<Option<Value>, LoadError> {
    let raw: Value = serde_yaml::from_str(text)?;
    let mut tree = strip_tags(raw)?;
    tree.apply_merge()?;
    if tree.is_null() {
        debug!("document is empty");
        return Ok(None);
    }
    Ok(Some(tree))
}

/// Replace every recognized tagged node with its payload.
fn strip_tags(value: Value) -> Result<Value, LoadError> {
    match value {
        Value::Tagged(tagged) => {
            let tagged = *tagged;
            let kind = tags::payload_kind(&tagged.tag)
                .ok_or_else(|| LoadError::UnknownTag(tagged.tag.to_string()))?;
            if !kind.accepts(&tagged.value) {
                return Err(LoadError::TagKind {
                    tag: tagged.tag.to_string(),
                    expected: kind.as_str(),
                });
            }
            strip_tags(tagged.value)
        }
        Value::Mapping(mapping) => {
            let mut out = Mapping::with_capacity(mapping.len());
            for (key, value) in mapping {
                out.insert(strip_tags(key)?, strip_tags(value)?);
            }
            Ok(Value::Mapping(out))
        }
        Value::Sequence(items) => items
            .into_iter()
            .map(strip_tags)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        scalar => Ok(scalar),
    }
}
