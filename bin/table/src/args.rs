//! Command line setup, mirroring the setup screen.
use clap::Parser;
use imp_gameplay::Config;
use imp_gameplay::Settings;
use imp_words::Restriction;

#[derive(Debug, Parser)]
#[command(name = "imposter", about = "Who doesn't know the word?")]
pub struct Args {
    /// Number of players
    #[arg(short, long, default_value_t = imp_core::DEFAULT_PLAYERS)]
    pub players: usize,
    /// Number of imposters
    #[arg(short, long, default_value_t = imp_core::DEFAULT_IMPOSTERS)]
    pub imposters: usize,
    /// "all", a category such as "animals", or leagues such as "nfl,nba"
    #[arg(short = 'c', long, default_value = "all", value_parser = restriction)]
    pub pool: Restriction,
    /// Player names, comma separated; missing names are prompted for
    #[arg(short, long, value_delimiter = ',')]
    pub names: Vec<String>,
    /// Seed for a reproducible deal
    #[arg(long)]
    pub seed: Option<u64>,
    /// Hide the category from imposters
    #[arg(long)]
    pub hide_category: bool,
    /// Withhold the hint from imposters
    #[arg(long)]
    pub no_hint: bool,
    /// Let imposters see each other
    #[arg(long)]
    pub allies: bool,
    /// First player always speaks first
    #[arg(long)]
    pub fixed_speaker: bool,
    /// Imposters get neither category nor hint
    #[arg(long)]
    pub hard: bool,
    /// Show imposters the length of the secret
    #[arg(long)]
    pub length: bool,
    /// Ring the terminal bell on acknowledgements
    #[arg(long)]
    pub sound: bool,
    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn restriction(s: &str) -> anyhow::Result<Restriction> {
    Restriction::try_from(s)
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            category: !self.hide_category,
            hint: !self.no_hint,
            allies: self.allies,
            shuffle: !self.fixed_speaker,
            hard: self.hard,
            length: self.length,
            sound: self.sound,
        }
    }
    /// Counts are clamped into range rather than rejected.
    pub fn config(&self) -> Config {
        let config = Config::default()
            .with_players(self.players)
            .with_imposters(self.imposters)
            .with_restriction(self.pool.clone())
            .with_settings(self.settings());
        if config.players() != self.players || config.imposters() != self.imposters {
            log::warn!(
                "adjusted to {} players and {} imposters",
                config.players(),
                config.imposters()
            );
        }
        config
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
