//! Centralized limits and thresholds for the lowering engine.
//!
//! The emitter walks the syntax tree recursively. Input trees come from an
//! external front-end (often as JSON), so their depth is not under our
//! control; these limits turn pathological nesting into a reported error
//! instead of a stack overflow.

// =============================================================================
// Recursion Depth Limits (Emitter)
// =============================================================================

/// Maximum scope depth for generated code.
///
/// Every namespace, class, member and `if` body adds one level. Real
/// code-behind files stay in the single digits; anything beyond this is
/// treated as a malformed tree.
///
/// # Example
///
/// ```csharp
/// if (a) { if (b) { if (c) { /* ... 256 levels ... */ } } }
/// ```
pub const MAX_NESTING_DEPTH: u32 = 256;

/// Maximum expression nesting followed by the expression rewriter.
///
/// Assignment chains (`a = b = c = ...`) and nested casts
/// (`(int)(long)(short)x`) recurse once per level.
pub const MAX_EXPRESSION_DEPTH: u32 = 500;
