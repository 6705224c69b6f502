//! Secret catalog for the imposter party game.
//!
//! A round's secret is drawn from a [`Pool`] under a [`Restriction`]:
//!
//! - [`Category`] — classic-mode word groups ("Animals", "Food & Drink", ...)
//! - [`League`] — sports-mode athlete groups (NFL, NBA, MLB)
//! - [`Restriction`] — everything, one category, or a set of leagues
//! - [`Entry`] — the `(secret, hint, category)` triple a draw yields
//! - [`Catalog`] — the built-in static table
//!
//! Sampling is uniform over the entries matching the restriction and
//! never strays outside it. Randomness is always supplied by the caller.
mod catalog;
mod category;
mod entry;
mod league;
mod pool;
mod restriction;

pub use catalog::*;
pub use category::*;
pub use entry::*;
pub use league::*;
pub use pool::*;
pub use restriction::*;
