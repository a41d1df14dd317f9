mod node;
mod tree_fs;

pub use node::{Children, Node};
pub use tree_fs::TreeFS;
