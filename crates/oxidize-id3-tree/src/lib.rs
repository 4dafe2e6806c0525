pub mod entropy;
pub mod partition;
pub mod decision_tree;
pub mod random_forest;

pub use entropy::*;
pub use partition::*;
pub use decision_tree::*;
pub use random_forest::*;
