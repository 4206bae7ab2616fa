pub mod show;
pub mod tree;
