pub mod progress;
pub mod terminal;
