mod list;
mod write;

pub use write::Posted;
