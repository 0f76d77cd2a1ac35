//! Transcript data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// One line of the terminal transcript with a unique id.
///
/// The id exists purely for efficient keying in `For` loops; equality
/// compares content only.
#[derive(Clone, Debug)]
pub struct TranscriptEntry {
    pub id: usize,
    pub data: TranscriptData,
}

/// Content of a transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptData {
    /// An echoed submission: prompt plus what the user typed.
    Input { prompt: String, text: String },
    /// Command output (possibly multi-line, possibly empty).
    Output(String),
    /// An error message, rendered distinctly.
    Error(String),
}

static TRANSCRIPT_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl TranscriptEntry {
    fn new(data: TranscriptData) -> Self {
        Self {
            id: TRANSCRIPT_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn input(prompt: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(TranscriptData::Input {
            prompt: prompt.into(),
            text: text.into(),
        })
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(TranscriptData::Output(text.into()))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(TranscriptData::Error(text.into()))
    }
}

impl PartialEq for TranscriptEntry {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
