pub mod actions;
pub mod builder;
pub mod errors;
pub mod preview;
pub mod skeleton;
pub mod tree;
