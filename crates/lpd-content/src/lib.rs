//! Launcher content documents.
//!
//! Small JSON files on disk — version info, news, mod list, server
//! status — read verbatim by the launcher and mutated through exactly
//! one shallow-merge path.
//!
//! - [`Shelf`] — The named documents and their seed defaults
//! - [`Library`] — Seeding, reads, merge-writes, raw-file resolution
mod library;
mod shelf;

pub use library::*;
pub use shelf::*;
