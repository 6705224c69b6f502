use imp_core::Position;

/// Errors raised by round setup and disclosure.
///
/// Both kinds are caller errors. A presentation layer is expected to gate
/// its controls so that neither is ever observed in normal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The round cannot be dealt as configured.
    Configuration(Misconfig),
    /// An operation was invoked out of order.
    InvalidState(Misstep),
}

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Misconfig {
    Players(usize),
    Imposters { imposters: usize, players: usize },
    Roster { expected: usize, actual: usize },
    EmptyPool(String),
}

/// Which ordering rule an operation broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Misstep {
    Unknown { index: Position, players: usize },
    Checked(Position),
    Incomplete { remaining: usize },
    Idle,
}

impl From<Misconfig> for Error {
    fn from(m: Misconfig) -> Self {
        Self::Configuration(m)
    }
}
impl From<Misstep> for Error {
    fn from(m: Misstep) -> Self {
        Self::InvalidState(m)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(m) => write!(f, "configuration error: {}", m),
            Self::InvalidState(m) => write!(f, "invalid state: {}", m),
        }
    }
}

impl std::fmt::Display for Misconfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Players(n) => write!(
                f,
                "{} players is outside {}..={}",
                n,
                imp_core::MIN_PLAYERS,
                imp_core::MAX_PLAYERS
            ),
            Self::Imposters { imposters, players } => write!(
                f,
                "{} imposters is outside {}..={} for {} players",
                imposters,
                imp_core::MIN_IMPOSTERS,
                players.saturating_sub(1),
                players
            ),
            Self::Roster { expected, actual } => {
                write!(f, "expected {} player names, got {}", expected, actual)
            }
            Self::EmptyPool(label) => write!(f, "no secrets match {}", label),
        }
    }
}

impl std::fmt::Display for Misstep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown { index, players } => {
                write!(f, "no player at seat {} of {}", index, players)
            }
            Self::Checked(index) => write!(f, "player {} already checked their role", index),
            Self::Incomplete { remaining } => {
                write!(f, "{} players have not checked their role", remaining)
            }
            Self::Idle => write!(f, "no round has been dealt"),
        }
    }
}

impl std::error::Error for Error {}
