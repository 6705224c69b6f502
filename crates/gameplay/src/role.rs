/// Which side of the secret a player is on.
///
/// Assigned once when the round is dealt and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Civilian,
    Imposter,
}

impl Role {
    pub fn is_imposter(&self) -> bool {
        matches!(self, Self::Imposter)
    }
    pub fn is_civilian(&self) -> bool {
        matches!(self, Self::Civilian)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Civilian => write!(f, "civilian"),
            Self::Imposter => write!(f, "imposter"),
        }
    }
}
