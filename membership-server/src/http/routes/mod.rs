//! Route handlers
//!
//! - pages: Home page
//! - register: Registration form and submission
//! - login: Login form and credential check
//! - members: Welcome page, profile editing, account deletion

pub mod login;
pub mod members;
pub mod pages;
pub mod register;
