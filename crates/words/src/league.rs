/// A sports-mode subject group.
///
/// Sports mode samples athletes instead of words; the player picks which
/// leagues the athlete may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum League {
    NFL,
    NBA,
    MLB,
}

impl League {
    pub const fn all() -> &'static [Self] {
        &[Self::NFL, Self::NBA, Self::MLB]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NFL => "NFL",
            Self::NBA => "NBA",
            Self::MLB => "MLB",
        }
    }
}

impl TryFrom<&str> for League {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "NFL" => Ok(Self::NFL),
            "NBA" => Ok(Self::NBA),
            "MLB" => Ok(Self::MLB),
            _ => Err(anyhow::anyhow!("unknown league: {}", s)),
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
