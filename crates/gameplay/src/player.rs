use super::*;

/// A seat at the table.
///
/// Names are opaque display labels: they need not be unique and are never
/// used for identity. Identity is the seat index within the round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    role: Role,
    check: Check,
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: Role::Civilian,
            check: Check::Unchecked,
        }
    }
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn is_imposter(&self) -> bool {
        self.role.is_imposter()
    }
    pub fn has_checked(&self) -> bool {
        self.check.is_checked()
    }
    pub(crate) fn assign(&mut self, role: Role) {
        self.role = role;
    }
    /// Returns false if the player had already checked.
    pub(crate) fn acknowledge(&mut self) -> bool {
        match self.check.acknowledge() {
            Some(check) => {
                self.check = check;
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
