//! Root application module.

use leptos::prelude::*;

use crate::components::Terminal;
use crate::config::ASCII_BANNER;

/// Root application component.
///
/// Renders the banner header and the terminal inside an error boundary so a
/// render panic shows a reload hint instead of a blank page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|_| {
            view! {
                <div class="fatal">
                    <p>"Something went wrong. Please reload the page."</p>
                </div>
            }
        }>
            <div class="page">
                <pre class="banner glow">{ASCII_BANNER}</pre>
                <Terminal />
            </div>
        </ErrorBoundary>
    }
}
