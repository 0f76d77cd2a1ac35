mod output;
pub mod state;
mod terminal;

pub use output::Output;
pub use terminal::Terminal;
