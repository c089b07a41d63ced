pub mod engine;
pub mod results;
pub mod score;

pub use engine::*;
pub use results::*;
pub use score::*;

#[cfg(test)]
mod tests;
