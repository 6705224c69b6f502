use super::*;

/// A feedback sound the presentation layer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Cue {
    /// an imposter closed their view
    Imposter,
    /// a civilian closed their view
    Civilian,
    /// the last player checked and the round can be revealed
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wave {
    Sine,
    Sawtooth,
}

impl Cue {
    pub fn wave(&self) -> Wave {
        match self {
            Self::Imposter => Wave::Sawtooth,
            Self::Civilian => Wave::Sine,
            Self::Complete => Wave::Sine,
        }
    }
    /// Frequencies in Hz, played in sequence `CUE_CHIME_STEP` apart.
    pub fn pitches(&self) -> &'static [f32] {
        match self {
            Self::Imposter => &[200.],
            Self::Civilian => &[400.],
            Self::Complete => &[600., 800.],
        }
    }
    pub fn duration(&self) -> std::time::Duration {
        imp_core::CUE_DURATION
    }

    /// Cues owed after `role` acknowledges; `complete` if that finished the round.
    pub fn after(role: Role, complete: bool, settings: &Settings) -> Vec<Self> {
        if !settings.sound {
            return Vec::new();
        }
        let first = match role {
            Role::Imposter => Self::Imposter,
            Role::Civilian => Self::Civilian,
        };
        std::iter::once(first)
            .chain(complete.then_some(Self::Complete))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_without_sound() {
        let settings = Settings::default();
        assert!(Cue::after(Role::Imposter, true, &settings).is_empty());
    }

    #[test]
    fn role_then_completion() {
        let settings = Settings {
            sound: true,
            ..Settings::default()
        };
        assert_eq!(Cue::after(Role::Civilian, false, &settings), vec![Cue::Civilian]);
        assert_eq!(
            Cue::after(Role::Imposter, true, &settings),
            vec![Cue::Imposter, Cue::Complete]
        );
    }

    #[test]
    fn completion_chimes_twice() {
        assert_eq!(Cue::Complete.pitches().len(), 2);
        assert_eq!(Cue::Imposter.wave(), Wave::Sawtooth);
    }

    #[test]
    fn every_cue_outlasts_its_chimes() {
        for cue in [Cue::Imposter, Cue::Civilian, Cue::Complete] {
            let chimes = imp_core::CUE_CHIME_STEP * (cue.pitches().len() as u32 - 1);
            assert!(cue.duration() > chimes);
        }
    }
}
