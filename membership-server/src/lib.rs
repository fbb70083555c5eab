//! membership-server: server-rendered member registration over SQLite
//!
//! Members register with a username, email and password, log in, view a
//! welcome page, edit their profile or delete their account. Every request
//! opens its own store connection; there are no sessions.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use config::MembershipConfig;
pub use db::{initialize, Store};
pub use http::{run_server, AppError, ServerConfig};
