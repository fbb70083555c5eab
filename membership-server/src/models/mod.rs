//! Domain models
//!
//! Member records and the validated form inputs that create or change them.

mod member;
mod validation;

pub use member::*;
pub use validation::ValidationError;
