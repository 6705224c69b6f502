/// A classic-mode word category.
///
/// Every classic [`Entry`](super::Entry) belongs to exactly one category.
/// The "All Categories" sentinel is not a variant; it is expressed as
/// [`Restriction::Everything`](super::Restriction::Everything).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Sports,
    Animals,
    FoodDrink,
    Locations,
    Objects,
    Entertainment,
    Professions,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sports,
            Self::Animals,
            Self::FoodDrink,
            Self::Locations,
            Self::Objects,
            Self::Entertainment,
            Self::Professions,
        ]
    }
    /// Human-readable label, also the resolved display category.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sports => "Sports",
            Self::Animals => "Animals",
            Self::FoodDrink => "Food & Drink",
            Self::Locations => "Locations",
            Self::Objects => "Objects",
            Self::Entertainment => "Entertainment",
            Self::Professions => "Professions",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|category| normalize(category.label()) == normalize(s))
            .ok_or_else(|| anyhow::anyhow!("unknown category: {}", s))
    }
}

/// "Food & Drink", "food-and-drink" and "FOOD AND DRINK" all compare equal.
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
