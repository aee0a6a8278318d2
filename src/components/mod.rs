pub mod footer;
pub mod tree;
