pub mod check;
pub mod decisions;
pub mod factor;
pub mod first;
pub mod grammar_loader;
pub mod output;
