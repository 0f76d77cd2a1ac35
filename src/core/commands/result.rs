//! Final result of one submitted line.

/// What the interpreter hands back to the rendering surface.
///
/// Exactly one of these per accepted submission. `Clear` is a sentinel
/// distinct from any legitimate output text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Output of the last pipeline stage (possibly empty or multi-line).
    Output(String),
    /// A terminal error message; session state is unaffected.
    Error(String),
    /// Clear the transcript.
    Clear,
}
