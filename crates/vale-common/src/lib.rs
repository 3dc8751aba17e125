//! Common types for the vale front-end.
//!
//! This crate provides the source-location types shared by every vale crate:
//! - `Position` - an offset/line/column triple into the source text
//! - `Span` - a begin/end position pair bracketing a token

pub mod position;
pub use position::Position;

pub mod span;
pub use span::Span;
