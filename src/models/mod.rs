pub mod review;
pub mod server;
