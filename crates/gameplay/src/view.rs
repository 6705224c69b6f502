use super::*;
use imp_core::Position;

/// A player's private view of their role.
///
/// Built by [`Round::reveal`]. Every optional field is `Some` exactly when
/// the matching [`Disclosure`] flag is set, so a renderer can simply draw
/// whatever is present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct View {
    seat: Position,
    name: String,
    role: Role,
    label: String,
    category: Option<String>,
    hint: Option<String>,
    length: Option<usize>,
    allies: Vec<String>,
}

impl View {
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// "IMPOSTER" for imposters, the secret for everyone else.
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
    /// Character count of the secret, spaces included.
    pub fn length(&self) -> Option<usize> {
        self.length
    }
    /// Names of the other imposters in seat order. Never includes this player.
    pub fn allies(&self) -> &[String] {
        &self.allies
    }
}

/// Disclosure.
impl Round {
    /// Computes what the player at `index` is shown when checking their role.
    ///
    /// Pure: the round is not modified, and repeated calls return the same
    /// view until [`acknowledge`](Self::acknowledge) commits the check.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the seat does not exist or the player has
    /// already checked.
    pub fn reveal(&self, config: &Config, index: Position) -> Result<View, Error> {
        let player = self.player(index)?;
        if player.has_checked() {
            return Err(Misstep::Checked(index).into());
        }
        let role = player.role();
        let imposters = self.imposters().count();
        let disclosure = Disclosure::new(role, config.settings(), !self.hint().is_empty(), imposters);
        log::debug!("seat {} is viewing their role", index);
        Ok(View {
            seat: index,
            name: player.name().to_string(),
            role,
            label: match role {
                Role::Imposter => imp_core::IMPOSTER_LABEL.to_string(),
                Role::Civilian => self.secret().to_string(),
            },
            category: disclosure.category.then(|| self.category().to_string()),
            hint: disclosure.hint.then(|| self.hint().to_string()),
            length: disclosure.length.then(|| self.secret().chars().count()),
            allies: match disclosure.allies {
                false => Vec::new(),
                true => self
                    .imposters()
                    .filter(|(seat, _)| *seat != index)
                    .map(|(_, p)| p.name().to_string())
                    .collect(),
            },
        })
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.label)?;
        if let Some(category) = self.category() {
            writeln!(f, "CATEGORY  {}", category)?;
        }
        if let Some(hint) = self.hint() {
            writeln!(f, "HINT      {}", hint)?;
        }
        if let Some(length) = self.length() {
            writeln!(f, "LENGTH    {} LETTERS", length)?;
        }
        if !self.allies.is_empty() {
            writeln!(f, "ALLIES    {}", self.allies.join(", "))?;
        }
        Ok(())
    }
}
