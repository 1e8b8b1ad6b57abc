pub mod check;
pub mod init;

pub use check::{exit_code, run_check, run_check_impl, validate_tree};
pub use init::{generate_script_template, run_init, run_init_impl};
