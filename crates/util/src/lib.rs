//! Core type aliases, traits, and constants for the imposter party game.
//!
//! This crate provides the foundational types and table limits shared by
//! the word catalog, the round engine, and the terminal host.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index in the roster. Doubles as turn order and player identity.
pub type Position = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE LIMITS
// The roster must leave at least one player who knows the secret.
// ============================================================================
/// Fewest players a round can be dealt for.
pub const MIN_PLAYERS: usize = 3;
/// Most players a round can be dealt for.
pub const MAX_PLAYERS: usize = 20;
/// Fewest imposters a round can be dealt with.
pub const MIN_IMPOSTERS: usize = 1;

// ============================================================================
// SETUP DEFAULTS
// ============================================================================
/// Roster size offered when a new game is configured.
pub const DEFAULT_PLAYERS: usize = 6;
/// Imposter count offered when a new game is configured.
pub const DEFAULT_IMPOSTERS: usize = 1;

// ============================================================================
// DISPLAY LABELS
// ============================================================================
/// Role label shown to imposters in place of the secret.
pub const IMPOSTER_LABEL: &str = "IMPOSTER";
/// Sentinel label for the unrestricted classic pool.
pub const ALL_CATEGORIES: &str = "All Categories";
/// Resolved category of every sports-mode secret.
pub const ATHLETE_CATEGORY: &str = "Professional Athlete";
/// Configured pool label for sports mode.
pub const ATHLETE_POOL: &str = "Professional Athletes";

// ============================================================================
// AUDIO CUES
// Tone parameters handed to whatever renders feedback sounds.
// ============================================================================
/// Length of every feedback tone.
pub const CUE_DURATION: std::time::Duration = std::time::Duration::from_millis(300);
/// Delay before the round-complete chime steps up to its second pitch.
pub const CUE_CHIME_STEP: std::time::Duration = std::time::Duration::from_millis(100);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// Stdout is reserved for the pass-and-reveal screens.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_leave_room_for_a_civilian() {
        assert!(MIN_PLAYERS > MIN_IMPOSTERS);
        assert!(MIN_PLAYERS <= DEFAULT_PLAYERS && DEFAULT_PLAYERS <= MAX_PLAYERS);
        assert!(DEFAULT_IMPOSTERS >= MIN_IMPOSTERS && DEFAULT_IMPOSTERS < DEFAULT_PLAYERS);
    }

    #[test]
    fn chime_step_fits_inside_a_cue() {
        assert!(CUE_CHIME_STEP < CUE_DURATION);
    }
}
