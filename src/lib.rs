//! Imposter: a pass-and-reveal social deduction word game.
//!
//! This facade crate re-exports the workspace library crates.
//!
//! - [`core`] — Type aliases, table limits, labels, and logging
//! - [`words`] — Categories, leagues, and the secret catalog
//! - [`gameplay`] — Round setup, disclosure, and session hosting
//!
//! The `imposter` binary in `bin/table` plays the game in a terminal.

pub use imp_core     as core;
pub use imp_gameplay as gameplay;
pub use imp_words    as words;

// Re-export commonly used types at the root
pub use imp_core::*;
pub use imp_gameplay::*;
pub use imp_words::*;
