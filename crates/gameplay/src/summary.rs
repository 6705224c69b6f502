use super::*;

/// The public, full-disclosure summary shown once everyone has checked.
///
/// Nothing is gated here: the reveal is the terminal state of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub secret: String,
    pub hint: Option<String>,
    pub category: String,
    pub pool: String,
    pub imposters: Vec<String>,
    pub speaker: String,
    pub players: usize,
    pub hard: bool,
}

impl Summary {
    pub fn n_imposters(&self) -> usize {
        self.imposters.len()
    }
}

/// Reveal.
impl Round {
    /// Summarizes the round for the reveal screen.
    ///
    /// # Errors
    ///
    /// [`Misstep::Incomplete`] while any player has yet to check their role.
    pub fn summarize(&self, config: &Config) -> Result<Summary, Error> {
        if !self.is_complete() {
            return Err(Misstep::Incomplete {
                remaining: self.remaining(),
            }
            .into());
        }
        log::info!("round complete, revealing {} imposters", self.imposters().count());
        Ok(Summary {
            secret: self.secret().to_string(),
            hint: Some(self.hint())
                .filter(|h| !h.is_empty())
                .map(String::from),
            category: self.category().to_string(),
            pool: config.restriction().label().to_string(),
            imposters: self
                .imposters()
                .map(|(_, p)| p.name().to_string())
                .collect(),
            speaker: self.player(self.speaker())?.name().to_string(),
            players: self.players().len(),
            hard: config.settings().hard,
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "THE SECRET WAS  {}", self.secret)?;
        if let Some(hint) = &self.hint {
            writeln!(f, "HINT            {}", hint)?;
        }
        writeln!(
            f,
            "IMPOSTER{}       {}",
            if self.n_imposters() > 1 { "S" } else { " " },
            self.imposters.join(", ")
        )?;
        writeln!(f, "CATEGORY        {}", self.pool)?;
        writeln!(f, "PLAYERS         {}", self.players)?;
        writeln!(f, "IMPOSTER COUNT  {}", self.n_imposters())?;
        writeln!(f, "OPENED BY       {}", self.speaker)?;
        if self.hard {
            writeln!(f, "HARD MODE WAS ACTIVE")?;
        }
        Ok(())
    }
}
