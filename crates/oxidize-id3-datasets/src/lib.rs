pub mod builtin;
pub mod split;

pub use builtin::*;
pub use split::*;
