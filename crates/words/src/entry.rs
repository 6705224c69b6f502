/// One candidate secret together with what may be disclosed about it.
///
/// - `secret` — the word or athlete name non-imposters see
/// - `hint` — a nudge for imposters, possibly empty
/// - `category` — the resolved display category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    secret: String,
    hint: String,
    category: String,
}

impl Entry {
    pub fn secret(&self) -> &str {
        &self.secret
    }
    pub fn hint(&self) -> &str {
        &self.hint
    }
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl From<(&str, &str, &str)> for Entry {
    fn from((secret, hint, category): (&str, &str, &str)) -> Self {
        Self {
            secret: secret.to_string(),
            hint: hint.to_string(),
            category: category.to_string(),
        }
    }
}

impl From<Entry> for (String, String, String) {
    fn from(entry: Entry) -> Self {
        (entry.secret, entry.hint, entry.category)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.secret, self.category)
    }
}
