use super::*;
use std::collections::BTreeSet;

/// Which part of the catalog a round may draw its secret from.
///
/// Classic mode restricts by [`Category`] or not at all; sports mode
/// restricts to a set of [`League`]s. An empty league set is a caller
/// error that round setup rejects before sampling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Restriction {
    #[default]
    Everything,
    Category(Category),
    Leagues(BTreeSet<League>),
}

impl Restriction {
    /// Sports mode with every league selected.
    pub fn sports() -> Self {
        Self::Leagues(League::all().iter().copied().collect())
    }
    pub fn is_sports(&self) -> bool {
        matches!(self, Self::Leagues(_))
    }
    /// True when no entry could possibly match.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leagues(leagues) => leagues.is_empty(),
            _ => false,
        }
    }
    /// The configured pool label restated at reveal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Everything => imp_core::ALL_CATEGORIES,
            Self::Category(category) => category.label(),
            Self::Leagues(_) => imp_core::ATHLETE_POOL,
        }
    }
}

impl From<Category> for Restriction {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl FromIterator<League> for Restriction {
    fn from_iter<I: IntoIterator<Item = League>>(iter: I) -> Self {
        Self::Leagues(iter.into_iter().collect())
    }
}

/// Parses `"all"`/`"All Categories"`, a category label, or a
/// comma-separated league list such as `"NFL,NBA"`.
impl TryFrom<&str> for Restriction {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case(imp_core::ALL_CATEGORIES) {
            return Ok(Self::Everything);
        }
        if let Ok(category) = Category::try_from(trimmed) {
            return Ok(Self::Category(category));
        }
        trimmed
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(League::try_from)
            .collect::<Result<BTreeSet<League>, _>>()
            .map(Self::Leagues)
            .map_err(|_| anyhow::anyhow!("unknown category or league list: {}", s))
    }
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Leagues(leagues) => write!(
                f,
                "{} ({})",
                self.label(),
                leagues
                    .iter()
                    .map(League::label)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            _ => write!(f, "{}", self.label()),
        }
    }
}
