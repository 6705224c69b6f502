//! Round engine for the imposter party game.
//!
//! One device is passed around the table. Each round, one secret is drawn
//! and some players are secretly made imposters who must blend in without
//! knowing it. This crate owns the parts with real invariants.
//!
//! ## Setup
//!
//! - [`Config`] — roster size, imposter count, pool restriction, [`Settings`]
//! - [`Round`] — the dealt secret, roles, and first speaker ([`Round::deal`])
//! - [`Player`] — a seat with its [`Role`] and one-way [`Check`] state
//!
//! ## Disclosure
//!
//! - [`Disclosure`] — the rule table deciding what a role may see
//! - [`View`] — one player's private screen ([`Round::reveal`])
//! - [`Summary`] — the full reveal once everyone has checked ([`Round::summarize`])
//! - [`Cue`] — feedback sounds owed after an acknowledgement
//!
//! ## Hosting
//!
//! - [`Session`] — owns at most one round; deal, play again, return to menu
//! - [`Phase`] — setup, viewing, or reveal
//!
//! All randomness is injected as `&mut impl Rng`.
mod check;
mod config;
mod cue;
mod disclosure;
mod error;
mod player;
mod role;
mod round;
mod session;
mod settings;
mod summary;
mod view;

pub use check::*;
pub use config::*;
pub use cue::*;
pub use disclosure::*;
pub use error::*;
pub use player::*;
pub use role::*;
pub use round::*;
pub use session::*;
pub use settings::*;
pub use summary::*;
pub use view::*;
