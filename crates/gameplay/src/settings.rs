/// The seven independent toggles chosen before a round.
///
/// # Fields
///
/// - `category` — imposters see the resolved category
/// - `hint` — imposters see the hint
/// - `allies` — imposters see who the other imposters are
/// - `shuffle` — first speaker is random rather than seat 0
/// - `hard` — suppresses category and hint for imposters, whatever the toggles above say
/// - `length` — imposters see how long the secret is
/// - `sound` — feedback cues are emitted on acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub category: bool,
    pub hint: bool,
    pub allies: bool,
    pub shuffle: bool,
    pub hard: bool,
    pub length: bool,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: true,
            hint: true,
            allies: false,
            shuffle: true,
            hard: false,
            length: false,
            sound: false,
        }
    }
}

impl imp_core::Arbitrary for Settings {
    fn random() -> Self {
        Self {
            category: rand::random(),
            hint: rand::random(),
            allies: rand::random(),
            shuffle: rand::random(),
            hard: rand::random(),
            length: rand::random(),
            sound: rand::random(),
        }
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let flags = [
            (self.category, "category"),
            (self.hint, "hint"),
            (self.allies, "allies"),
            (self.shuffle, "shuffle"),
            (self.hard, "hard"),
            (self.length, "length"),
            (self.sound, "sound"),
        ];
        let on = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect::<Vec<_>>();
        if on.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", on.join("+"))
        }
    }
}
