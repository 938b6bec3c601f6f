//! # Inline Kinds
//!
//! Emphasis types that own their delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `**text**`, matched by regex
//! - **`Emphasis`**: `*text*`, matched by scanning for its delimiter
//!
//! The parser asks these types for their patterns and delimiters; it never
//! hardcodes `*`.

pub mod emphasis;
pub mod strong;

pub use emphasis::Emphasis;
pub use strong::Strong;
