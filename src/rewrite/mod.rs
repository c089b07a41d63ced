pub mod config;
pub mod engine;
pub mod node;

pub use config::*;
pub use engine::*;
pub use node::*;
