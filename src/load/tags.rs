//! Custom tags recognized by the pipeline dialect.
//!
//! Every tag is a transparent constructor: the tag is dropped and its payload
//! is kept untouched. The table only records which payload kind a tag accepts.

use serde_yaml::value::Tag;
use serde_yaml::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Mapping,
    Scalar,
}

impl PayloadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKind::Mapping => "mapping",
            PayloadKind::Scalar => "scalar",
        }
    }

    pub fn accepts(self, value: &Value) -> bool {
        match self {
            PayloadKind::Mapping => value.is_mapping(),
            PayloadKind::Scalar => matches!(
                value,
                Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
            ),
        }
    }
}

pub const KNOWN_TAGS: &[(&str, PayloadKind)] = &[
    ("GenericPipeline", PayloadKind::Mapping),
    ("BasicStage", PayloadKind::Mapping),
    ("MonitoringService", PayloadKind::Mapping),
    ("Conditional", PayloadKind::Mapping),
    ("Loop", PayloadKind::Mapping),
    ("FilePath", PayloadKind::Scalar),
    ("Expression", PayloadKind::Scalar),
    ("MultiLine", PayloadKind::Scalar),
];

/// Look up the payload kind for a tag, or `None` if the dialect does not know it.
pub fn payload_kind(tag: &Tag) -> Option<PayloadKind> {
    KNOWN_TAGS
        .iter()
        .find(|(name, _)| *tag == Tag::new(*name))
        .map(|(_, kind)| *kind)
}
