// Library surface for headless/integration tests and reuse.
// The binary only adds terminal setup/teardown on top of this.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod matching;
pub mod passage;
pub mod runtime;
pub mod score;
pub mod session;
pub mod ui;

pub use error::{Error, Result};

/// Passage used when none is given on the command line.
pub const DEFAULT_PASSAGE: &str = "When on board H.M.S. Beagle, as naturalist, I was much struck with certain facts in the distribution of the inhabitants of South America.";
