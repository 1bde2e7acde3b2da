//! Scope tracking for emission.
//!
//! `EmitContext` is a small `Copy` value handed down the recursive walk. A
//! callee that needs a deeper scope derives a new context with [`enter`];
//! the caller's value is never touched, so depth is back to its previous
//! value on every exit path, including early returns through `?`.
//!
//! Flattened blocks add no indentation but still recurse, so they count
//! against the same nesting limit through [`enter_block`].
//!
//! [`enter`]: EmitContext::enter
//! [`enter_block`]: EmitContext::enter_block

use wpfjs_common::limits::MAX_NESTING_DEPTH;

use crate::error::EmitError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitContext<'a> {
    depth: u32,
    /// Recursion levels so far: indentation levels plus flattened blocks.
    nesting: u32,
    namespace: Option<&'a str>,
    class: Option<&'a str>,
}

impl<'a> EmitContext<'a> {
    /// Top-level context: depth 0, no enclosing namespace or class.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(self) -> u32 {
        self.depth
    }

    pub fn namespace(self) -> Option<&'a str> {
        self.namespace
    }

    pub fn class(self) -> Option<&'a str> {
        self.class
    }

    /// Context one nesting level deeper.
    pub fn enter(self) -> Result<Self, EmitError> {
        let nested = self.nest()?;
        Ok(Self {
            depth: self.depth + 1,
            ..nested
        })
    }

    /// Context for a block flattened into its parent: same depth, one more
    /// level of recursion.
    pub fn enter_block(self) -> Result<Self, EmitError> {
        self.nest()
    }

    fn nest(self) -> Result<Self, EmitError> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(EmitError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        Ok(Self {
            nesting: self.nesting + 1,
            ..self
        })
    }

    /// Same depth, inside namespace `name`. Clears any enclosing class.
    pub fn with_namespace(self, name: &'a str) -> Self {
        Self {
            namespace: Some(name),
            class: None,
            ..self
        }
    }

    /// Same depth, inside class `name`.
    pub fn with_class(self, name: &'a str) -> Self {
        Self {
            class: Some(name),
            ..self
        }
    }
}
