pub mod automaton;

pub use automaton::*;
