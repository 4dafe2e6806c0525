//! # OxidizeID3
//!
//! Entropy-driven decision trees over categorical attributes with boolean labels.
//!
//! ## Modules
//!
//! - **core** — `Attributes`, `LabeledExample`, the `Record` trait and `Id3Error`
//! - **tree** — entropy and partition metrics, ID3 induction, classification, majority-vote forests
//! - **datasets** — built-in hiring dataset and seeded train/test split
//!
//! ```
//! use oxidize_id3::datasets::{load_hiring, HIRING_ATTRIBUTES};
//! use oxidize_id3::core::Attributes;
//! use oxidize_id3::tree::build_tree;
//!
//! let tree = build_tree(&load_hiring(), &HIRING_ATTRIBUTES).unwrap();
//! let candidate = Attributes::new()
//!     .with("level", "Junior")
//!     .with("lang", "Java")
//!     .with("tweets", "yes")
//!     .with("phd", "no");
//! assert!(tree.classify(&candidate));
//! ```

/// Data model and errors.
pub use oxidize_id3_core as core;

/// Tree induction, classification and forests.
pub use oxidize_id3_tree as tree;

/// Built-in datasets.
pub use oxidize_id3_datasets as datasets;
