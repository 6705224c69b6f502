use super::*;
use imp_core::Position;
use imp_words::Pool;
use rand::Rng;

/// One dealt round: the secret, who the imposters are, and who speaks first.
///
/// Rounds are produced whole by [`deal`](Self::deal) and replaced whole by
/// the next deal. After dealing, the only mutation is each player's one-way
/// [`Check`] transition through [`acknowledge`](Self::acknowledge).
///
/// # Fields
///
/// - `secret` — the word or athlete every civilian sees
/// - `hint` — may be empty
/// - `category` — resolved display category of the drawn entry
/// - `players` — seat order is turn order and identity
/// - `speaker` — seat that opens the discussion
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    secret: String,
    hint: String,
    category: String,
    players: Vec<Player>,
    speaker: Position,
}

/// Round setup.
impl Round {
    /// Deals a fresh round.
    ///
    /// Draws one secret from `pool` under the configured restriction, marks
    /// exactly `config.imposters()` distinct seats as imposters with every
    /// such subset equally likely, and picks the first speaker. All
    /// randomness comes from `rng`, so a seeded generator reproduces the deal.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the roster length differs from the
    /// configured player count, the counts are out of range, or nothing in
    /// the pool matches the restriction.
    pub fn deal<P, R>(config: &Config, names: &[String], pool: &P, rng: &mut R) -> Result<Self, Error>
    where
        P: Pool + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        if names.len() != config.players() {
            return Err(Misconfig::Roster {
                expected: config.players(),
                actual: names.len(),
            }
            .into());
        }
        let restriction = config.restriction();
        let entry = pool
            .sample(restriction, rng)
            .ok_or_else(|| Misconfig::EmptyPool(restriction.to_string()))?;
        let mut players = names
            .iter()
            .map(String::as_str)
            .map(Player::from)
            .collect::<Vec<_>>();
        for seat in rand::seq::index::sample(rng, config.players(), config.imposters()).into_iter() {
            players[seat].assign(Role::Imposter);
        }
        let speaker = if config.settings().shuffle {
            rng.random_range(0..config.players())
        } else {
            0
        };
        let (secret, hint, category) = entry.into();
        log::debug!(
            "dealt {} players, {} imposters from {}",
            config.players(),
            config.imposters(),
            restriction
        );
        Ok(Self {
            secret,
            hint,
            category,
            players,
            speaker,
        })
    }
}

/// Accessors.
impl Round {
    pub fn secret(&self) -> &str {
        &self.secret
    }
    pub fn hint(&self) -> &str {
        &self.hint
    }
    pub fn category(&self) -> &str {
        &self.category
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn speaker(&self) -> Position {
        self.speaker
    }
    /// The player at `index`, or [`Misstep::Unknown`].
    pub fn player(&self, index: Position) -> Result<&Player, Error> {
        self.players.get(index).ok_or_else(|| {
            Misstep::Unknown {
                index,
                players: self.players.len(),
            }
            .into()
        })
    }
    /// Imposter seats with their players, in seat order.
    pub fn imposters(&self) -> impl Iterator<Item = (Position, &Player)> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_imposter())
    }
    /// Seats that have not yet checked their role, in seat order.
    pub fn pending(&self) -> impl Iterator<Item = (Position, &Player)> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.has_checked())
    }
    pub fn remaining(&self) -> usize {
        self.pending().count()
    }
    /// True once every player has checked. Gates the reveal.
    pub fn is_complete(&self) -> bool {
        self.players.iter().all(Player::has_checked)
    }
}

/// Check transitions.
impl Round {
    /// Commits the `Unchecked -> Checked` transition for one player.
    ///
    /// Call after the player has closed their private view. Fails with
    /// [`Misstep::Checked`] if they had already acknowledged.
    pub fn acknowledge(&mut self, index: Position) -> Result<(), Error> {
        let players = self.players.len();
        let player = self
            .players
            .get_mut(index)
            .ok_or(Misstep::Unknown { index, players })?;
        if player.acknowledge() {
            log::debug!("seat {} acknowledged, {} remaining", index, self.remaining());
            Ok(())
        } else {
            Err(Misstep::Checked(index).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imp_words::Catalog;
    use imp_words::Category;
    use imp_words::Entry;
    use imp_words::Restriction;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeMap;
    use std::collections::BTreeSet;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Player {}", i)).collect()
    }

    #[test]
    fn deals_exact_imposter_count() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for players in imp_core::MIN_PLAYERS..=imp_core::MAX_PLAYERS {
            for imposters in 1..players {
                let config = Config::default()
                    .with_players(players)
                    .with_imposters(imposters);
                let round = Round::deal(&config, &names(players), &Catalog, rng).unwrap();
                assert_eq!(round.players().len(), players);
                assert_eq!(round.imposters().count(), imposters);
                assert!(round.players().iter().all(|p| !p.has_checked()));
                assert!(round.speaker() < players);
            }
        }
    }

    #[test]
    fn seeded_deals_reproduce() {
        let config = Config::default().with_players(8).with_imposters(3);
        let a = Round::deal(&config, &names(8), &Catalog, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = Round::deal(&config, &names(8), &Catalog, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_first_speaker_is_seat_zero() {
        let settings = Settings {
            shuffle: false,
            ..Settings::default()
        };
        let config = Config::default().with_settings(settings);
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let round = Round::deal(&config, &names(6), &Catalog, rng).unwrap();
            assert_eq!(round.speaker(), 0);
        }
    }

    #[test]
    fn random_first_speaker_covers_every_seat() {
        let config = Config::default();
        let ref mut rng = SmallRng::seed_from_u64(4);
        let speakers = (0..500)
            .map(|_| Round::deal(&config, &names(6), &Catalog, rng).unwrap())
            .map(|round| round.speaker())
            .collect::<BTreeSet<_>>();
        assert_eq!(speakers, (0..6).collect());
    }

    #[test]
    fn three_of_four_leaves_one_civilian() {
        let config = Config::default().with_players(4).with_imposters(3);
        let ref mut rng = SmallRng::seed_from_u64(5);
        let round = Round::deal(&config, &names(4), &Catalog, rng).unwrap();
        assert_eq!(round.players().iter().filter(|p| !p.is_imposter()).count(), 1);
    }

    #[test]
    fn imposter_selection_is_uniform() {
        let players = 6;
        let imposters = 2;
        let trials = 30_000;
        let config = Config::default()
            .with_players(players)
            .with_imposters(imposters);
        let ref mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
        let mut counts = vec![0usize; players];
        for _ in 0..trials {
            let round = Round::deal(&config, &names(players), &Catalog, rng).unwrap();
            for (seat, _) in round.imposters() {
                counts[seat] += 1;
            }
        }
        let expected = imposters as f64 / players as f64;
        for count in counts {
            let observed = count as f64 / trials as f64;
            assert!((observed - expected).abs() < 0.02, "{} vs {}", observed, expected);
        }
    }

    #[test]
    fn imposter_subsets_are_equally_likely() {
        let trials = 24_000;
        let config = Config::default().with_players(4).with_imposters(2);
        let ref mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        let mut counts = BTreeMap::<Vec<Position>, usize>::new();
        for _ in 0..trials {
            let round = Round::deal(&config, &names(4), &Catalog, rng).unwrap();
            let subset = round.imposters().map(|(seat, _)| seat).collect();
            *counts.entry(subset).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = 1. / 6.;
        for (subset, count) in counts {
            let observed = count as f64 / trials as f64;
            assert!((observed - expected).abs() < 0.015, "{:?}: {}", subset, observed);
        }
    }

    #[test]
    fn secret_respects_restriction() {
        let config = Config::default().with_restriction(Category::Professions.into());
        let ref mut rng = SmallRng::seed_from_u64(6);
        for _ in 0..50 {
            let round = Round::deal(&config, &names(6), &Catalog, rng).unwrap();
            assert_eq!(round.category(), "Professions");
        }
        let config = Config::sports();
        let round = Round::deal(&config, &names(6), &Catalog, rng).unwrap();
        assert_eq!(round.category(), imp_core::ATHLETE_CATEGORY);
    }

    #[test]
    fn roster_mismatch_is_a_configuration_error() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let config = Config::default();
        assert_eq!(
            Round::deal(&config, &names(5), &Catalog, rng),
            Err(Error::Configuration(Misconfig::Roster {
                expected: 6,
                actual: 5
            }))
        );
    }

    #[test]
    fn empty_pools_are_configuration_errors() {
        let ref mut rng = SmallRng::seed_from_u64(8);
        let config = Config::default().with_restriction(Restriction::Leagues(BTreeSet::new()));
        assert!(matches!(
            Round::deal(&config, &names(6), &Catalog, rng),
            Err(Error::Configuration(Misconfig::EmptyPool(_)))
        ));
        let empty: &[Entry] = &[];
        let config = Config::default();
        assert!(matches!(
            Round::deal(&config, &names(6), empty, rng),
            Err(Error::Configuration(Misconfig::EmptyPool(_)))
        ));
    }

    #[test]
    fn blank_names_are_opaque_labels() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let names = vec!["".to_string(), "   ".to_string(), "Ann".to_string()];
        let config = Config::default().with_players(3);
        let round = Round::deal(&config, &names, &Catalog, rng).unwrap();
        assert_eq!(round.players()[0].name(), "");
        assert_eq!(round.players()[1].name(), "   ");
    }

    #[test]
    fn acknowledge_is_one_way() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let config = Config::default().with_players(3);
        let mut round = Round::deal(&config, &names(3), &Catalog, rng).unwrap();
        assert_eq!(round.remaining(), 3);
        round.acknowledge(1).unwrap();
        assert!(round.players()[1].has_checked());
        assert_eq!(round.remaining(), 2);
        assert_eq!(
            round.acknowledge(1),
            Err(Error::InvalidState(Misstep::Checked(1)))
        );
        assert_eq!(
            round.acknowledge(3),
            Err(Error::InvalidState(Misstep::Unknown {
                index: 3,
                players: 3
            }))
        );
        assert!(!round.is_complete());
        round.acknowledge(0).unwrap();
        round.acknowledge(2).unwrap();
        assert!(round.is_complete());
        assert_eq!(round.pending().count(), 0);
    }

    #[test]
    fn roles_survive_acknowledgement() {
        let ref mut rng = SmallRng::seed_from_u64(12);
        let config = Config::default().with_players(5).with_imposters(2);
        let mut round = Round::deal(&config, &names(5), &Catalog, rng).unwrap();
        let before = round.imposters().map(|(i, _)| i).collect::<Vec<_>>();
        for i in 0..5 {
            round.acknowledge(i).unwrap();
        }
        let after = round.imposters().map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(before, after);
    }
}
