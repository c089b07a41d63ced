pub mod builtin;
pub mod entry;
pub mod facet;
pub mod registry;
pub mod table;

pub use builtin::*;
pub use entry::*;
pub use facet::*;
pub use registry::*;
pub use table::*;
