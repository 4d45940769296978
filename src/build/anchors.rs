//! Anchor table: anchor name → id of the node that last published it.

use std::collections::HashMap;

use crate::options::ReferenceStyle;

#[derive(Debug, Default)]
pub struct AnchorTable {
    published: HashMap<String, String>,
}

impl AnchorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node_id` as the publisher of `anchor`. Later publishers win.
    pub fn publish(&mut self, anchor: &str, node_id: &str) {
        self.published.insert(anchor.to_string(), node_id.to_string());
    }

    /// Resolve an `inputs` reference to the publishing node id.
    pub fn resolve(&self, reference: &str, style: ReferenceStyle) -> Option<&str> {
        let anchor = match style {
            ReferenceStyle::Direct => reference,
            ReferenceStyle::AliasPrefixed => reference.strip_prefix('*')?,
        };
        self.published.get(anchor).map(String::as_str)
    }
}
