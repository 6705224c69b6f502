//! The interactive pass-and-reveal loop.
use super::args::Args;
use super::screen;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;
use dialoguer::console::Term;
use imp_core::Position;
use imp_gameplay::*;
use imp_words::Catalog;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One device, one session, one terminal.
pub struct Table {
    session: Session,
    rng: SmallRng,
    term: Term,
}

impl Table {
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let config = args.config();
        let names = Self::roster(config.players(), &args.names)?;
        let rng = match args.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            session: Session::new(config, names)?,
            rng,
            term: Term::stdout(),
        })
    }

    /// Deals, then cycles viewing and reveal until the group quits.
    pub fn run(mut self) -> anyhow::Result<()> {
        self.session.deal(&Catalog, &mut self.rng)?;
        self.term.clear_screen()?;
        loop {
            match self.session.phase() {
                Phase::Setup => return Ok(()),
                Phase::Viewing => self.turn()?,
                Phase::Reveal => self.reveal()?,
            }
        }
    }

    /// Names given on the command line first, then prompts for the rest.
    /// Extra names beyond the roster size are ignored.
    fn roster(players: usize, given: &[String]) -> anyhow::Result<Vec<String>> {
        if given.len() > players {
            log::warn!("ignoring {} extra names", given.len() - players);
        }
        (0..players)
            .map(|i| match given.get(i) {
                Some(name) => Ok(name.trim().to_string()),
                None => Input::<String>::new()
                    .with_prompt(format!("Name for player {}", i + 1))
                    .default(format!("Player {}", i + 1))
                    .interact_text()
                    .map(|name| name.trim().to_string())
                    .map_err(anyhow::Error::from),
            })
            .collect()
    }

    /// One player checks their role in private.
    fn turn(&mut self) -> anyhow::Result<()> {
        let sports = self.session.config().restriction().is_sports();
        let round = self.session.round().ok_or(Error::from(Misstep::Idle))?;
        screen::table(round);
        let pending = round
            .pending()
            .map(|(seat, player)| (seat, player.name().to_string()))
            .collect::<Vec<(Position, String)>>();
        let labels = pending.iter().map(|(_, n)| n.as_str()).collect::<Vec<_>>();
        let choice = Select::new()
            .with_prompt("Pass the device. Who is checking?")
            .items(&labels)
            .default(0)
            .report(false)
            .interact()?;
        let (seat, name) = pending[choice].clone();
        let ready = Confirm::new()
            .with_prompt(format!("{}, is the screen hidden from everyone else?", name))
            .default(true)
            .interact()?;
        if !ready {
            self.term.clear_screen()?;
            return Ok(());
        }
        let view = self.session.view(seat)?;
        self.term.clear_screen()?;
        screen::view(&view, sports);
        Input::<String>::new()
            .with_prompt("GOT IT! (press enter)")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        self.term.clear_screen()?;
        for cue in self.session.acknowledge(seat)? {
            screen::ring(cue)?;
        }
        Ok(())
    }

    /// Public reveal, then play again or quit.
    fn reveal(&mut self) -> anyhow::Result<()> {
        let sports = self.session.config().restriction().is_sports();
        let summary = self.session.summary()?;
        screen::summary(&summary, sports);
        let choice = Select::new()
            .items(&["Play again", "Quit"])
            .default(0)
            .report(false)
            .interact()?;
        match choice {
            0 => {
                self.session.replay(&Catalog, &mut self.rng)?;
                self.term.clear_screen()?;
            }
            _ => self.session.quit(),
        }
        Ok(())
    }
}
