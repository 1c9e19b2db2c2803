pub mod board;
pub mod package;
pub mod platform;
