pub mod config;
pub mod validation;

pub use config::*;
pub use validation::*;
