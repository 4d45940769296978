//! Classification of value-tree nodes into stages.

use serde_yaml::{Mapping, Value};

/// How a value reached during traversal is treated.
pub enum Shape<'a> {
    /// Non-empty mapping or sequence: materialized as a node.
    Stage(StageView<'a>),
    /// Scalar: never a node.
    Leaf,
    /// Empty mapping or empty sequence: skipped.
    Invalid,
}

/// Non-empty sequences become nodes too, but carry no stage fields.
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Mapping(m) if !m.is_empty() => Shape::Stage(StageView { fields: Some(m) }),
        Value::Sequence(items) if !items.is_empty() => Shape::Stage(StageView { fields: None }),
        Value::Mapping(_) | Value::Sequence(_) => Shape::Invalid,
        _ => Shape::Leaf,
    }
}

/// Read-only accessors over the recognized stage fields.
pub struct StageView<'a> {
    fields: Option<&'a Mapping>,
}

impl<'a> StageView<'a> {
    fn field(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key)
    }

    /// Display name; empty strings and non-scalar values count as absent.
    pub fn name(&self) -> Option<String> {
        let text = match self.field("name")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    /// Anchor names published by `outputs`, in mapping order. Non-string values are ignored.
    pub fn published_anchors(&self) -> Vec<&'a str> {
        match self.field("outputs") {
            Some(Value::Mapping(outputs)) => outputs.values().filter_map(Value::as_str).collect(),
            _ => vec![],
        }
    }

    /// Raw references named by `inputs`: a single string or a sequence of strings.
    pub fn input_refs(&self) -> Vec<&'a str> {
        match self.field("inputs") {
            Some(Value::String(s)) => vec![s.as_str()],
            Some(Value::Sequence(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => vec![],
        }
    }

    /// Child stages under `runs`; absent unless `runs` is a sequence.
    pub fn runs(&self) -> &'a [Value] {
        match self.field("runs") {
            Some(Value::Sequence(children)) => children.as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn classify_shapes() {
        assert!(matches!(classify(&parse("{}")), Shape::Invalid));
        assert!(matches!(classify(&parse("[]")), Shape::Invalid));
        assert!(matches!(classify(&parse("3")), Shape::Leaf));
        assert!(matches!(classify(&parse("~")), Shape::Leaf));
        assert!(matches!(classify(&parse("a: 1")), Shape::Stage(_)));
    }

    #[test]
    fn stage_fields() {
        let value = parse(
            "name: Build\noutputs: {bin: artifact, n: 3, log: build-log}\ninputs: [src, 7, deps]\nruns: [{name: a}, {}]",
        );
        let Shape::Stage(stage) = classify(&value) else {
            panic!("Expected stage");
        };
        assert_eq!(stage.name().as_deref(), Some("Build"));
        assert_eq!(stage.published_anchors(), vec!["artifact", "build-log"]);
        assert_eq!(stage.input_refs(), vec!["src", "deps"]);
        assert_eq!(stage.runs().len(), 2);
    }

    #[test]
    fn sequence_is_a_fieldless_stage() {
        let value = parse("[{name: inner, runs: [{name: x}]}]");
        let Shape::Stage(stage) = classify(&value) else {
            panic!("Expected stage");
        };
        assert_eq!(stage.name(), None);
        assert!(stage.input_refs().is_empty());
        assert!(stage.published_anchors().is_empty());
        assert!(stage.runs().is_empty());
    }

    #[test]
    fn scalar_names_render_and_empty_names_fall_through() {
        let value = parse("name: 42");
        let Shape::Stage(stage) = classify(&value) else {
            panic!("Expected stage");
        };
        assert_eq!(stage.name().as_deref(), Some("42"));

        let value = parse("name: ''\nruns: not-a-list");
        let Shape::Stage(stage) = classify(&value) else {
            panic!("Expected stage");
        };
        assert_eq!(stage.name(), None);
        assert!(stage.runs().is_empty());
    }
}
