use super::*;

/// What one player may see about the secret and the other imposters.
///
/// A combinational rule table over role and settings. Civilians see the
/// category and (non-empty) hint. Imposters see them only when the
/// matching toggle is on and hard mode is off. Hard mode never hides the
/// secret length, which imposters see whenever that toggle is on. Allies
/// are listed only with two or more imposters and the toggle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Disclosure {
    pub category: bool,
    pub hint: bool,
    pub length: bool,
    pub allies: bool,
}

impl Disclosure {
    /// - `hinted` — whether the round's hint is non-empty
    /// - `imposters` — how many imposters the round has in total
    pub fn new(role: Role, settings: &Settings, hinted: bool, imposters: usize) -> Self {
        let imposter = role.is_imposter();
        Self {
            category: !imposter || (settings.category && !settings.hard),
            hint: hinted && (!imposter || (settings.hint && !settings.hard)),
            length: imposter && settings.length,
            allies: imposter && settings.allies && imposters >= 2,
        }
    }
}
