pub mod catalog;
pub mod cli;
pub mod error;
pub mod filter;
pub mod generate;
pub mod naming;
pub mod parser;
pub mod writer;

pub use cli::{Cli, Commands};
pub use error::DataError;
pub use generate::{generate_keys, Generation, Summary};
