use super::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A source of secrets that can be sampled under a [`Restriction`].
///
/// Implementors only enumerate matching entries; sampling is uniform over
/// that enumeration. An implementation must never list an entry that falls
/// outside the restriction.
pub trait Pool {
    /// Every entry matching the restriction.
    fn candidates(&self, restriction: &Restriction) -> Vec<Entry>;

    /// Draws one matching entry uniformly at random.
    /// Returns `None` only when nothing matches.
    fn sample<R>(&self, restriction: &Restriction, rng: &mut R) -> Option<Entry>
    where
        R: Rng + ?Sized,
    {
        self.candidates(restriction).choose(rng).cloned()
    }
}

impl<P> Pool for &P
where
    P: Pool + ?Sized,
{
    fn candidates(&self, restriction: &Restriction) -> Vec<Entry> {
        (**self).candidates(restriction)
    }
}

/// A fixed list of entries, filtered by category label or league hint.
///
/// Useful for callers that bring their own word lists.
impl Pool for [Entry] {
    fn candidates(&self, restriction: &Restriction) -> Vec<Entry> {
        self.iter()
            .filter(|entry| match restriction {
                Restriction::Everything => entry.category() != imp_core::ATHLETE_CATEGORY,
                Restriction::Category(category) => entry.category() == category.label(),
                Restriction::Leagues(leagues) => {
                    entry.category() == imp_core::ATHLETE_CATEGORY
                        && leagues
                            .iter()
                            .any(|league| entry.hint().starts_with(league.label()))
                }
            })
            .cloned()
            .collect()
    }
}
