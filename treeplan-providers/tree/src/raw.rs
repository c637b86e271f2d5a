//! Serde mirror of the tree data layout.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::node::NodeKind;

#[derive(Debug, Deserialize)]
pub(crate) struct RawTree {
    pub nodes: BTreeMap<String, RawNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub out: Vec<RawId>,
    #[serde(default, rename = "in")]
    pub inbound: Vec<RawId>,
}

/// Node ids appear both as JSON numbers and as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    /// Returns the id as written, for diagnostics.
    pub fn render(&self) -> String {
        match self {
            Self::Number(id) => id.to_string(),
            Self::Text(id) => id.clone(),
        }
    }
}
