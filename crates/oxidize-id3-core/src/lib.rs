pub mod error;
pub mod example;

pub use error::{Id3Error, Id3Result};
pub use example::{Attributes, LabeledExample, Record};
