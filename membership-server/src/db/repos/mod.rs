//! Repository pattern for database access
//!
//! Each repository borrows a single connection for the duration of a request.

pub mod members;

pub use members::MemberRepo;
