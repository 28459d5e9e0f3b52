pub mod common;
pub mod depth;
pub mod insert;
pub mod summary;
