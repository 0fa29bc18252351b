//! The persisted library of played files and the directory helpers the
//! browser uses.
//!
//! `LibraryStore` owns the deduplicated list of `FileRecord`s and the record
//! file backing it; `listing` produces the per-directory views.

mod display;
mod listing;
mod record;
mod store;
mod tags;

pub use display::display_from_fields;
pub use listing::{DirectoryEntry, PARENT_ENTRY, list_directory};
pub use record::FileRecord;
pub use store::LibraryStore;
pub use tags::TrackTags;
