//! Terminal view component.
//!
//! Wires the shell session and the input state machine to the DOM: keyboard
//! handling, autoscroll, the status-bar clock, and persisted history.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::output::Output;
use super::state::{TermEvent, TermState, reduce};
use crate::config::APP_NAME;
use crate::core::{self, ShellSession, history};
use crate::utils::dom;

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let session = RwSignal::new(ShellSession::new());
    let state = RwSignal::new(TermState::new(history::load()));

    let output_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let prompt = Signal::derive(move || session.with(|s| s.prompt_path()));

    // Status-bar clock, refreshed once per second.
    let clock = RwSignal::new(String::new());
    Effect::new(move || {
        let tick = move || {
            let time: String = js_sys::Date::new_0().to_locale_time_string("en-US").into();
            clock.set(time);
        };
        tick();
        gloo_timers::callback::Interval::new(1_000, tick).forget();
    });

    // Keep the newest transcript line in view.
    Effect::new(move || {
        state.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    // Focus input on mount.
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let submit = move || {
        let line = state.with(|s| s.input.trim().to_string());
        if line.is_empty() {
            state.update(|s| s.input.clear());
            return;
        }
        let prompt_text = prompt.get_untracked();
        let Some(result) = session.try_update(|s| core::execute(s, &line)) else {
            return;
        };
        state.update(|s| {
            reduce(
                s,
                TermEvent::Submitted {
                    prompt: prompt_text,
                    input: line,
                    result,
                },
            );
        });
        state.with_untracked(|s| history::save(&s.history));
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.code() == "KeyC" {
            ev.prevent_default();
            let prompt_text = prompt.get_untracked();
            state.update(|s| {
                reduce(
                    s,
                    TermEvent::Cancel {
                        prompt: prompt_text,
                    },
                );
            });
            return;
        }

        match ev.key().as_str() {
            "Enter" => submit(),
            "Tab" => {
                ev.prevent_default();
                if state.with_untracked(|s| s.completions.is_empty()) {
                    let candidates = state
                        .with_untracked(|st| session.with_untracked(|se| core::completions(se, &st.input)));
                    state.update(|s| reduce(s, TermEvent::CompletionStart { candidates }));
                } else {
                    state.update(|s| reduce(s, TermEvent::CompletionCycle));
                }
                move_cursor_to_end();
            }
            "ArrowUp" => {
                ev.prevent_default();
                state.update(|s| reduce(s, TermEvent::HistoryUp));
                move_cursor_to_end();
            }
            "ArrowDown" => {
                ev.prevent_default();
                state.update(|s| reduce(s, TermEvent::HistoryDown));
                move_cursor_to_end();
            }
            _ => {
                // Any other key ends a Tab cycle.
                if state.with_untracked(|s| !s.completions.is_empty()) {
                    state.update(|s| reduce(s, TermEvent::CompletionReset));
                }
            }
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        state.update(|s| reduce(s, TermEvent::Input(input.value())));
    };

    // Candidate row shown while cycling through multiple matches.
    let suggestions_view = move || {
        state.with(|s| {
            if s.completions.len() < 2 {
                return None;
            }
            let active = s.completion_index;
            Some(view! {
                <div class="suggestions">
                    {s.completions
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            let class = if i == active {
                                "suggestion suggestion-active"
                            } else {
                                "suggestion"
                            };
                            view! { <span class=class>{name.clone()}</span> }
                        })
                        .collect_view()}
                </div>
            })
        })
    };

    view! {
        <div class="terminal" on:click=move |_| dom::focus_terminal_input()>
            <div class="status-bar">
                <span class="status-title">{APP_NAME}</span>
                <span class="status-clock">{move || clock.get()}</span>
            </div>

            <div node_ref=output_ref class="output">
                <For
                    each=move || state.with(|s| s.transcript.clone())
                    key=|entry| entry.id
                    children=|entry| view! { <Output entry=entry /> }
                />
            </div>

            <div class="input-line">
                <span class="prompt glow">{move || prompt.get()}</span>
                <span class="prompt-sep">"$ "</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class="input"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || state.with(|s| s.input.clone())
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>

            {suggestions_view}
        </div>
    }
}
