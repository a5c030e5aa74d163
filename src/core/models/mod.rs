pub mod common;
pub mod poll;
