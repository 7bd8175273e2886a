//! # Syntax Kinds
//!
//! Marker types that own their syntax delimiters. The splitters and the
//! line classifier ask these types; they never hardcode `* `, `**` or `$`.
//!
//! - **`BulletItem`**: `PREFIX = "* "` - marks a bullet line
//! - **`Bold`**: `DELIM = "**"` - splits a line into alternating weights
//! - **`MathSpan`**: `BLOCK = "$$"`, `INLINE = "$"` - math delimiters

pub mod bold;
pub mod bullet_item;
pub mod math_span;

pub use bold::Bold;
pub use bullet_item::BulletItem;
pub use math_span::MathSpan;
