//! Declarative validation scripts.

mod filesystem;
mod loader;
mod model;
mod runner;
mod template;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{LOCAL_SCRIPT_NAME, LoadedScript, ScriptLoader, parse_script};
pub use model::{Assertion, AssertionKind, Script};
pub use runner::{RunStats, ScriptRunner};
pub use template::{Bindings, RESERVED_NAMES, is_valid_binding};
