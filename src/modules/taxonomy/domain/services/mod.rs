pub mod naming;
pub mod tree;

pub use tree::TreePartition;
