//! Terminal input state machine.
//!
//! A pure reducer over [`TermState`]: the component computes side effects
//! (running the interpreter, gathering completion candidates, reading the
//! prompt) and feeds them in as events, so every interaction rule here is
//! testable without a browser.

use crate::config::WELCOME_LINES;
use crate::core::{CommandResult, apply_completion};
use crate::models::TranscriptEntry;

/// Everything the input line and transcript need to render.
#[derive(Clone, Debug)]
pub struct TermState {
    /// Current content of the input line.
    pub input: String,
    /// Ordered transcript; append-only except on clear.
    pub transcript: Vec<TranscriptEntry>,
    /// Previously submitted lines, oldest first.
    pub history: Vec<String>,
    /// Position while browsing history with the arrow keys.
    pub history_index: Option<usize>,
    /// Candidates being cycled with Tab; empty when not completing.
    pub completions: Vec<String>,
    pub completion_index: usize,
}

impl TermState {
    /// Fresh state with the welcome banner and previously stored history.
    pub fn new(history: Vec<String>) -> Self {
        Self {
            input: String::new(),
            transcript: WELCOME_LINES
                .iter()
                .map(|line| TranscriptEntry::output(*line))
                .collect(),
            history,
            history_index: None,
            completions: Vec::new(),
            completion_index: 0,
        }
    }

    fn reset_completions(&mut self) {
        self.completions.clear();
        self.completion_index = 0;
    }
}

/// One user interaction, with any side-effect results computed by the caller.
#[derive(Clone, Debug)]
pub enum TermEvent {
    /// The input line changed.
    Input(String),
    /// A non-blank line was submitted and executed.
    Submitted {
        prompt: String,
        input: String,
        result: CommandResult,
    },
    /// Ctrl-C: echo the pending line with a `^C` marker and drop it.
    Cancel { prompt: String },
    HistoryUp,
    HistoryDown,
    /// Tab pressed outside a completion cycle; candidates already gathered.
    CompletionStart { candidates: Vec<String> },
    /// Tab pressed again while cycling.
    CompletionCycle,
    /// Any other key ends the cycle.
    CompletionReset,
}

/// Advance the state by one event.
pub fn reduce(state: &mut TermState, event: TermEvent) {
    match event {
        TermEvent::Input(value) => state.input = value,

        TermEvent::Submitted {
            prompt,
            input,
            result,
        } => {
            state.history.push(input.clone());
            state.history_index = None;
            state.input.clear();
            state.reset_completions();
            match result {
                CommandResult::Clear => state.transcript.clear(),
                CommandResult::Output(text) => {
                    state.transcript.push(TranscriptEntry::input(prompt, input));
                    state.transcript.push(TranscriptEntry::output(text));
                }
                CommandResult::Error(text) => {
                    state.transcript.push(TranscriptEntry::input(prompt, input));
                    state.transcript.push(TranscriptEntry::error(text));
                }
            }
        }

        TermEvent::Cancel { prompt } => {
            let line = format!("{}^C", state.input);
            state.transcript.push(TranscriptEntry::input(prompt, line));
            state.transcript.push(TranscriptEntry::output(""));
            state.input.clear();
            state.history_index = None;
            state.reset_completions();
        }

        TermEvent::HistoryUp => {
            if state.history.is_empty() {
                return;
            }
            let index = match state.history_index {
                None => state.history.len() - 1,
                Some(0) => 0,
                Some(i) => i - 1,
            };
            state.history_index = Some(index);
            state.input = state.history[index].clone();
            state.reset_completions();
        }

        TermEvent::HistoryDown => {
            let Some(index) = state.history_index else {
                return;
            };
            let next = index + 1;
            if next >= state.history.len() {
                state.history_index = None;
                state.input.clear();
            } else {
                state.history_index = Some(next);
                state.input = state.history[next].clone();
            }
            state.reset_completions();
        }

        TermEvent::CompletionStart { candidates } => {
            if candidates.is_empty() {
                return;
            }
            state.input = apply_completion(&state.input, &candidates[0]);
            if candidates.len() == 1 {
                state.reset_completions();
            } else {
                state.completions = candidates;
                state.completion_index = 0;
            }
        }

        TermEvent::CompletionCycle => {
            if state.completions.is_empty() {
                return;
            }
            state.completion_index = (state.completion_index + 1) % state.completions.len();
            state.input =
                apply_completion(&state.input, &state.completions[state.completion_index]);
        }

        TermEvent::CompletionReset => state.reset_completions(),
    }
}
