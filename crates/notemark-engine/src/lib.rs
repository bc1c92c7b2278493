//! # notemark-engine
//!
//! Lightweight markdown-to-HTML rendering for note archives.
//!
//! The whole public surface is one function: [`render`]. It takes raw
//! note text and returns an HTML fragment. HTML-significant characters
//! from the input (`&`, `<`, `>`) are escaped before any markup is
//! synthesized, so the only live tags in the output are the ones the
//! renderer itself generates.
//!
//! The dialect is deliberately small (see [`render`] for the block and
//! inline constructs); it is not CommonMark and does not try to be.

pub mod render;

pub use render::render;
