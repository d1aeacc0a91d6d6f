// Shared utilities

pub mod constants;
pub mod dates;

pub use constants::*;
pub use dates::*;
