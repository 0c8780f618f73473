use tracing::{debug, warn};

use crate::connect::password::{self, PasswordConfig};
use crate::connect::storage::Storage;
use crate::error::{ConnectError, Result};
use crate::model::{Player, RegistrationForm};
use crate::utils::next_id;

/// Registered players, mirrored to a durable storage slot.
///
/// The whole list is rewritten to storage on every registration.
#[derive(Debug)]
pub struct AccountStore<S> {
    storage: S,
    key: String,
    hashing: PasswordConfig,
    players: Vec<Player>,
}

impl<S: Storage> AccountStore<S> {
    /// Open the store, loading whatever account list `storage` holds under `key`.
    /// An empty slot yields an empty store.
    ///
    /// Only lists written by this store can be read. The older browser format,
    /// with plaintext `password` fields and `""` for unselected styles, is
    /// rejected with [`ConnectError::Json`] rather than migrated.
    pub fn open(storage: S, key: impl Into<String>, hashing: PasswordConfig) -> Result<Self> {
        let key = key.into();
        let players = match storage.get(&key)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        debug!(key = %key, count = players.len(), "loaded persisted accounts");

        Ok(Self {
            storage,
            key,
            hashing,
            players,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a new player and persist the updated list.
    ///
    /// Nothing changes in memory if persisting fails.
    pub fn register(&mut self, form: RegistrationForm) -> Result<&Player> {
        if form.name.is_empty()
            || form.email.is_empty()
            || form.phone.is_empty()
            || form.password.is_empty()
        {
            return Err(ConnectError::Validation("Please fill all required fields"));
        }
        if form.password != form.confirm_password {
            return Err(ConnectError::Validation("Passwords do not match"));
        }
        if self.players.iter().any(|p| p.email == form.email) {
            warn!(email = %form.email, "registration rejected: email taken");
            return Err(ConnectError::DuplicateEmail { email: form.email });
        }

        let player = Player {
            id: next_id(),
            password_hash: password::hash(&self.hashing, form.password.as_bytes())?,
            name: form.name,
            email: form.email,
            phone: form.phone,
            batting_style: form.batting_style,
            bowling_style: form.bowling_style,
            experience: form.experience,
        };

        let mut updated = self.players.clone();
        updated.push(player);
        let json = serde_json::to_string(&updated)?;
        self.storage.set(&self.key, &json)?;
        self.players = updated;

        let player = &self.players[self.players.len() - 1];
        debug!(id = %player.id, email = %player.email, "registered player");
        Ok(player)
    }

    /// Find the account matching both `email` and `password`.
    pub fn login(&self, email: &str, password: &str) -> Result<&Player> {
        if email.is_empty() || password.is_empty() {
            return Err(ConnectError::Validation("Please fill all fields"));
        }

        for player in self.players.iter().filter(|p| p.email == email) {
            if password::verify(password.as_bytes(), &player.password_hash)? {
                debug!(id = %player.id, "login succeeded");
                return Ok(player);
            }
        }

        debug!(email, "login rejected");
        Err(ConnectError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::password::cheap;
    use crate::connect::storage::MemoryStorage;
    use crate::model::{BattingStyle, Experience};

    const KEY: &str = "cricketUsers";

    fn store() -> AccountStore<MemoryStorage> {
        AccountStore::open(MemoryStorage::new(), KEY, cheap()).unwrap()
    }

    fn form(email: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Rahul Sharma".to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
            batting_style: Some(BattingStyle::RightHand),
            experience: Some(Experience::Intermediate),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_persists_full_list() {
        let mut store = store();
        store.register(form("a@example.com", "pw1")).unwrap();
        store.register(form("b@example.com", "pw2")).unwrap();

        let json = store.storage().get(KEY).unwrap().unwrap();
        let persisted: Vec<Player> = serde_json::from_str(&json).unwrap();
        assert_eq!(persisted, store.players());
        assert_eq!(persisted.len(), 2);
        assert!(!json.contains("pw1"));
        assert!(json.contains("\"battingStyle\":\"Right Hand\""));
    }

    #[test]
    fn test_register_requires_fields() {
        let mut store = store();
        for blank in [
            RegistrationForm {
                name: String::new(),
                ..form("a@example.com", "pw")
            },
            RegistrationForm {
                phone: String::new(),
                ..form("a@example.com", "pw")
            },
            form("", "pw"),
            form("a@example.com", ""),
        ] {
            assert!(matches!(
                store.register(blank),
                Err(ConnectError::Validation("Please fill all required fields"))
            ));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_register_rejects_password_mismatch() {
        let mut store = store();
        let mismatched = RegistrationForm {
            confirm_password: "other".to_string(),
            ..form("a@example.com", "pw")
        };
        assert!(matches!(
            store.register(mismatched),
            Err(ConnectError::Validation("Passwords do not match"))
        ));
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let mut store = store();
        store.register(form("a@example.com", "pw")).unwrap();

        let err = store.register(form("a@example.com", "other")).unwrap_err();
        assert!(matches!(err, ConnectError::DuplicateEmail { ref email } if email == "a@example.com"));
        assert_eq!(store.len(), 1);

        // email comparison is exact
        store.register(form("A@example.com", "pw")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_login_round_trip() {
        let mut store = store();
        let id = store.register(form("a@example.com", "secret")).unwrap().id.clone();

        assert_eq!(store.login("a@example.com", "secret").unwrap().id, id);
        assert!(matches!(
            store.login("a@example.com", "Secret"),
            Err(ConnectError::InvalidCredentials)
        ));
        assert!(matches!(
            store.login("b@example.com", "secret"),
            Err(ConnectError::InvalidCredentials)
        ));
        assert!(matches!(
            store.login("", "secret"),
            Err(ConnectError::Validation(_))
        ));
    }

    #[test]
    fn test_open_loads_persisted_accounts() {
        let mut first = store();
        first.register(form("a@example.com", "secret")).unwrap();
        let storage = first.storage().clone();

        let reopened = AccountStore::open(storage, KEY, cheap()).unwrap();
        assert_eq!(reopened.len(), 1);
        assert!(reopened.login("a@example.com", "secret").is_ok());
    }

    #[test]
    fn test_open_rejects_plaintext_account_list() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                KEY,
                r#"[{"id":"1","name":"Ravi","email":"r@example.com","phone":"1","password":"pw","battingStyle":"","bowlingStyle":"","experience":""}]"#,
            )
            .unwrap();
        assert!(matches!(
            AccountStore::open(storage, KEY, cheap()),
            Err(ConnectError::Json(_))
        ));
    }

    #[test]
    fn test_open_rejects_corrupt_slot() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY, "not json").unwrap();
        assert!(matches!(
            AccountStore::open(storage, KEY, cheap()),
            Err(ConnectError::Json(_))
        ));
    }
}
