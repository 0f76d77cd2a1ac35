use leptos::prelude::*;

use crate::models::{TranscriptData, TranscriptEntry};

/// Render a single transcript entry.
#[component]
pub fn Output(entry: TranscriptEntry) -> impl IntoView {
    match entry.data {
        TranscriptData::Input { prompt, text } => view! {
            <div class="line line-input">
                <span class="prompt glow">{prompt}</span>
                <span class="prompt-sep">"$ "</span>
                <span class="input-text">{text}</span>
            </div>
        }
        .into_any(),
        TranscriptData::Output(text) => view! {
            <pre class="line line-output">{text}</pre>
        }
        .into_any(),
        TranscriptData::Error(text) => view! {
            <pre class="line line-error">{text}</pre>
        }
        .into_any(),
    }
}
