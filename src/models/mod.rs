//! Data models shared between the core and the rendering surface.

mod terminal;

pub use terminal::{TranscriptData, TranscriptEntry};
