pub mod address;
pub mod schedule;
pub mod token;

pub use address::*;
pub use token::*;
