pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod path_utils;
pub mod quantity;
pub mod scanner;
pub mod validator;

pub use catalog::{Catalog, CatalogEntry, Item, ItemKind};
pub use error::{Result, TreeGuardError};
pub use quantity::Quantity;
pub use validator::{EXTRA_ITEM_ID, Query, Validator, Warning, WarningContext, WarningKind};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_WARNINGS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Print an error and the causes its own message does not already show.
pub fn print_error(err: &TreeGuardError) {
    let message = err.to_string();
    eprintln!("Error: {message}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            eprintln!("  Caused by: {cause_text}");
        }
        source = cause.source();
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
