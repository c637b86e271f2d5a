//! Display metadata attached to tree nodes.

use serde::{Deserialize, Serialize};

/// Role of a node in the passive tree.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Small passive.
    #[default]
    Normal,
    /// Notable passive.
    Notable,
    /// Keystone passive.
    Keystone,
    /// Mastery node.
    Mastery,
    /// Jewel socket.
    Jewel,
}

impl NodeKind {
    /// Returns the lowercase name used in tree data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Notable => "notable",
            Self::Keystone => "keystone",
            Self::Mastery => "mastery",
            Self::Jewel => "jewel",
        }
    }
}

/// Name and kind of one node.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeInfo {
    name: Option<String>,
    kind: NodeKind,
}

impl NodeInfo {
    pub(crate) fn new(name: Option<String>, kind: NodeKind) -> Self {
        let name = name.filter(|name| !name.trim().is_empty());
        Self { name, kind }
    }

    /// Display name, if the data provides a non-blank one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Node role.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }
}
