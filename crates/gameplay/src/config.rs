use super::*;
use imp_core::MAX_PLAYERS;
use imp_core::MIN_IMPOSTERS;
use imp_core::MIN_PLAYERS;
use imp_words::Restriction;

/// Everything chosen before a round is dealt.
///
/// A `Config` built through [`with_players`](Self::with_players) and
/// [`with_imposters`](Self::with_imposters) always satisfies
/// `MIN_PLAYERS <= players <= MAX_PLAYERS` and `1 <= imposters < players`;
/// both setters clamp rather than fail, the way a stepper control would.
/// [`new`](Self::new) is the strict alternative that rejects bad counts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    players: usize,
    imposters: usize,
    restriction: Restriction,
    settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: imp_core::DEFAULT_PLAYERS,
            imposters: imp_core::DEFAULT_IMPOSTERS,
            restriction: Restriction::Everything,
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Strict constructor. Fails with [`Error::Configuration`] instead of clamping.
    pub fn new(
        players: usize,
        imposters: usize,
        restriction: Restriction,
        settings: Settings,
    ) -> Result<Self, Error> {
        let config = Self {
            players,
            imposters,
            restriction,
            settings,
        };
        config.validate()?;
        Ok(config)
    }
    /// Sports mode with every league selected.
    pub fn sports() -> Self {
        Self {
            restriction: Restriction::sports(),
            ..Self::default()
        }
    }

    pub fn players(&self) -> usize {
        self.players
    }
    pub fn imposters(&self) -> usize {
        self.imposters
    }
    pub fn civilians(&self) -> usize {
        self.players - self.imposters
    }
    pub fn restriction(&self) -> &Restriction {
        &self.restriction
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sets the roster size, clamped into the table limits.
    /// The imposter count is re-clamped so a civilian always remains.
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.imposters = self.imposters.clamp(MIN_IMPOSTERS, self.players - 1);
        self
    }
    /// Sets the imposter count, clamped into `1..players`.
    pub fn with_imposters(mut self, imposters: usize) -> Self {
        self.imposters = imposters.clamp(MIN_IMPOSTERS, self.players - 1);
        self
    }
    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restriction = restriction;
        self
    }
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Checks the count invariants and that the restriction can match something.
    pub fn validate(&self) -> Result<(), Error> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(Misconfig::Players(self.players).into());
        }
        if self.imposters < MIN_IMPOSTERS || self.imposters >= self.players {
            return Err(Misconfig::Imposters {
                imposters: self.imposters,
                players: self.players,
            }
            .into());
        }
        if self.restriction.is_empty() {
            return Err(Misconfig::EmptyPool(self.restriction.to_string()).into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} players, {} imposters, {} [{}]",
            self.players, self.imposters, self.restriction, self.settings
        )
    }
}
