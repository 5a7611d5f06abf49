//! Domain library for the CampusTube client: the video/profile/comment
//! record types shared by every page, the browser-independent favorites
//! store and the in-memory catalog filter pipeline.
//!
//! Everything in here is synchronous and free of browser APIs so it can be
//! unit-tested natively; the frontend crate supplies the `localStorage`
//! adapter at the edge.

pub mod favorites;
pub mod filter;
pub mod models;

pub use favorites::{FavoritesRead, FavoritesStore, KeyValueStore, MemoryStore, WriteOutcome};
pub use filter::{filter_videos, FilterCriteria, Selection};
pub use models::{Comment, Profile, Video, SEMESTERS, SUBJECTS};
