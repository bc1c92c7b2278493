//! Block kinds, each owning its own syntax knowledge.
//!
//! Delimiter constants, detection predicates, and HTML emission for a
//! construct all live in that construct's module; the render loop only
//! dispatches.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod table;
pub mod thematic_break;

pub use block_quote::{BlockQuote, QuoteLine};
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use table::Table;
pub use thematic_break::ThematicBreak;
