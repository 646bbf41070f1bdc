pub mod feeds;
pub mod resume;
