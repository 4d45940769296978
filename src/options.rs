//! Host-supplied configuration for graph building.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Node footprint on the canvas plus the gap between neighbours.
const NODE_WIDTH: f64 = 150.0;
const NODE_HEIGHT: f64 = 100.0;
const SPACING_ADDER: f64 = 50.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    pub root_policy: RootPolicy,
    pub reference_style: ReferenceStyle,
    pub spacing: Spacing,
}

/// Whether the first top-level stage is drawn or treated as an implicit root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RootPolicy {
    #[default]
    EmitAll,
    SuppressFirst,
}

/// How an `inputs` string names an anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceStyle {
    /// `inputs: build-artifact`
    #[default]
    Direct,
    /// `inputs: "*build-artifact"`
    AliasPrefixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            horizontal: NODE_WIDTH + SPACING_ADDER,
            vertical: NODE_HEIGHT + SPACING_ADDER,
        }
    }
}

impl BuildOptions {
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json)
            .map_err(|e| ConvertError::options(format!("Failed to parse options JSON: {}", e)))
    }

    pub fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.root_policy = policy;
        self
    }

    pub fn with_reference_style(mut self, style: ReferenceStyle) -> Self {
        self.reference_style = style;
        self
    }
}
