use super::*;
use imp_core::Position;
use imp_words::Pool;
use rand::Rng;

/// Where a session is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// configured, no round dealt
    Setup,
    /// dealt, some players have not checked
    Viewing,
    /// everyone has checked, summary available
    Reveal,
}

/// The host of a game: one configuration, one roster, at most one round.
///
/// Dealing a new round discards the previous one entirely. Nothing but the
/// configuration and roster carries over, so every deal draws its secret
/// from the whole restriction.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    names: Vec<String>,
    round: Option<Round>,
}

impl Session {
    /// Validates the configuration and roster up front.
    pub fn new(config: Config, names: Vec<String>) -> Result<Self, Error> {
        config.validate()?;
        if names.len() != config.players() {
            return Err(Misconfig::Roster {
                expected: config.players(),
                actual: names.len(),
            }
            .into());
        }
        log::info!("new session: {}", config);
        Ok(Self {
            config,
            names,
            round: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
    pub fn phase(&self) -> Phase {
        match &self.round {
            None => Phase::Setup,
            Some(round) if round.is_complete() => Phase::Reveal,
            Some(_) => Phase::Viewing,
        }
    }

    /// Deals a new round, replacing any current one.
    pub fn deal<P, R>(&mut self, pool: &P, rng: &mut R) -> Result<&Round, Error>
    where
        P: Pool + ?Sized,
        R: Rng + ?Sized,
    {
        let round = Round::deal(&self.config, &self.names, pool, rng)?;
        Ok(self.round.insert(round))
    }

    /// "Play again": a fresh round with the same configuration and roster.
    /// Only allowed from the reveal.
    pub fn replay<P, R>(&mut self, pool: &P, rng: &mut R) -> Result<&Round, Error>
    where
        P: Pool + ?Sized,
        R: Rng + ?Sized,
    {
        self.current()?.summarize(&self.config)?;
        self.deal(pool, rng)
    }

    /// "Return to menu": drops the round.
    pub fn quit(&mut self) {
        log::info!("session closed");
        self.round = None;
    }

    pub fn view(&self, index: Position) -> Result<View, Error> {
        self.current()?.reveal(&self.config, index)
    }

    /// Commits a player's check and returns the feedback cues to play.
    pub fn acknowledge(&mut self, index: Position) -> Result<Vec<Cue>, Error> {
        let round = self.round.as_mut().ok_or(Misstep::Idle)?;
        round.acknowledge(index)?;
        let role = round.player(index)?.role();
        let complete = round.is_complete();
        if complete {
            log::info!("every player has checked");
        }
        Ok(Cue::after(role, complete, self.config.settings()))
    }

    pub fn summary(&self) -> Result<Summary, Error> {
        self.current()?.summarize(&self.config)
    }

    fn current(&self) -> Result<&Round, Error> {
        self.round.as_ref().ok_or_else(|| Misstep::Idle.into())
    }
}
