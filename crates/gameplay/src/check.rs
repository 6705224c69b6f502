/// Whether a player has looked at their role this round.
///
/// A one-way, two-state machine per player:
///
/// ```text
/// Unchecked --acknowledge--> Checked (terminal)
/// ```
///
/// Viewing a role does not move the machine; only the acknowledgement that
/// closes the view does. The round is complete once every player is `Checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Check {
    #[default]
    Unchecked,
    Checked,
}

impl Check {
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }
    /// The state after an acknowledgement, or `None` if already terminal.
    pub fn acknowledge(self) -> Option<Self> {
        match self {
            Self::Unchecked => Some(Self::Checked),
            Self::Checked => None,
        }
    }
}
