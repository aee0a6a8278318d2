pub mod scanner;
pub mod sort;
pub mod tree;
