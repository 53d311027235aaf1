use std::collections::HashMap;

/// One row of the static login table.
#[derive(Debug, Clone)]
pub struct CredentialEntry {
    pub password: String,
    pub is_admin: bool,
}

/// Static username -> credential mapping, built once at startup and
/// injected into the router state. Lookups never fail; unknown usernames
/// simply verify as false.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: HashMap<String, CredentialEntry>,
}

impl CredentialTable {
    /// The fixed table shipped for the event.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("ismp@esportz", "iitropargoat", false),
            ("max1112", "moelester", true),
        ])
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, bool)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(username, password, is_admin)| {
                (
                    username.into(),
                    CredentialEntry {
                        password: password.into(),
                        is_admin,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// True iff `username` is known and the stored password matches the
    /// supplied one exactly. Plain string comparison; these are shared
    /// event passwords, not user secrets.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries
            .get(username)
            .is_some_and(|entry| entry.password == password)
    }

    /// Stored admin flag; unknown usernames are never admins.
    pub fn is_admin(&self, username: &str) -> bool {
        self.entries
            .get(username)
            .is_some_and(|entry| entry.is_admin)
    }
}
