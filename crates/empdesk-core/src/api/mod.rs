pub mod employees;
pub mod errors;

pub use employees::*;
pub use errors::*;
