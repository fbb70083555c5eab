//! Command implementations for the membership CLI

pub mod init;
pub mod serve;

pub use init::run_init;
pub use serve::run_serve;
