//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via normalised views and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts rendered blocks to a stable, serializable `Snap`
//!   format that reads well in assertion diffs
//! - **`invariants`**: Runtime checks for renderer correctness (spans in
//!   bounds, leaves contained in their block, leaf text equal to its source)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, describe_leaf, normalize};
