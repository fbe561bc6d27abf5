//! CLI command handlers, one file per command.

mod completions;
mod lookup;
mod run;
mod url;

pub use completions::{run_completions, run_man};
pub use lookup::run_lookup;
pub use run::run_batch;
pub use url::run_url;
