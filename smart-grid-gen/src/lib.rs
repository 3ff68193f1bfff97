//! Generates the `SmartGridMapping` Solidity contract from a JSON list of users.
//!
//! Each user record becomes one `users.push(User(...))` statement in the contract
//! constructor, in input order.

pub mod cli;
pub mod error;
pub mod ops;
pub mod record;
pub mod utils;

pub use error::{GenerateError, Result};
pub use ops::smart_grid_generate::{generate, GenerateOptions, GenerateSummary};
pub use record::{load_records, parse_records, UserRecord};
pub use utils::defaults::{render_contract, render_statement};
