//! # Inline Parsing
//!
//! Converts lightweight emphasis markup in one line of text into `InlineNode`s.
//!
//! ## Precedence
//!
//! `**strong**` runs are matched first over the whole line. `*emphasis*` runs
//! are then matched over the whole line too, with every strong run treated
//! as one opaque piece of content. An emphasis run can therefore wrap strong
//! runs (`*a **b** c*`) but never splits one.
//!
//! There is no escaping: a literal `*` that pairs up with another one becomes
//! emphasis, an unpaired one stays literal text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Strong, Emphasis)
//! - **`kinds`**: delimiter types owning their patterns (Strong, Emphasis)
//! - **`parser`**: `parse_inline()` entry point and the HTML renderer

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{format_inline_styles, parse_inline, render_inline_html};
pub use types::InlineNode;
