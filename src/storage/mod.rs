pub mod memory;
pub mod reviews;
