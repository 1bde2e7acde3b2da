//! Names of the UI-bindable visual nodes.

use rustc_hash::FxHashSet;
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::error::EmitError;

/// Ordered, distinct identifiers naming the markup's visual nodes.
///
/// Supplied once when the emitter is created; origin (markup scan, manifest,
/// hand-written list) is the caller's business.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeNameList {
    names: Vec<String>,
}

impl NodeNameList {
    /// Validate and collect the names, keeping their order.
    pub fn new<I, S>(names: I) -> Result<Self, EmitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let mut collected = Vec::new();
        for name in names {
            let name = name.into();
            if !is_identifier(&name) {
                return Err(EmitError::InvalidNodeName { name });
            }
            if !seen.insert(name.clone()) {
                return Err(EmitError::DuplicateNodeName { name });
            }
            collected.push(name);
        }
        Ok(NodeNameList { names: collected })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// JavaScript identifier check: an XID start (or `$`, `_`) followed by XID
/// continue characters (or `$`).
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (is_xid_start(first) || first == '_' || first == '$')
        && chars.all(|ch| is_xid_continue(ch) || ch == '$')
}
