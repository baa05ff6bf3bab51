use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::model::{Registration, User};

/// Session owner. The catalog and theme code only ever read `current_user`.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
    fn login(&self, email: &str, password: &str) -> bool;
    fn register(&self, profile: Registration) -> bool;
    fn logout(&self);
}

struct Account {
    user: User,
    password: String,
}

/// In-memory accounts for running without a backend. Nothing survives a restart.
#[derive(Default)]
pub struct LocalAuth {
    accounts: Mutex<HashMap<String, Account>>,
    current: Mutex<Option<User>>,
}

impl LocalAuth {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_current(&self, user: Option<User>) {
        match self.current.lock() {
            Ok(mut current) => *current = user,
            Err(poisoned) => *poisoned.into_inner() = user,
        }
    }
}

impl AuthProvider for LocalAuth {
    fn current_user(&self) -> Option<User> {
        self.current.lock().ok().and_then(|c| c.clone())
    }

    fn login(&self, email: &str, password: &str) -> bool {
        let user = {
            let Ok(accounts) = self.accounts.lock() else {
                return false;
            };
            match accounts.get(&email.to_lowercase()) {
                Some(account) if account.password == password => account.user.clone(),
                _ => {
                    warn!("Login rejected");
                    return false;
                }
            }
        };
        info!(user_id = %user.id, "Signed in");
        self.set_current(Some(user));
        true
    }

    fn register(&self, profile: Registration) -> bool {
        let key = profile.email.to_lowercase();
        let user = {
            let Ok(mut accounts) = self.accounts.lock() else {
                return false;
            };
            if accounts.contains_key(&key) {
                warn!("Registration rejected: email already in use");
                return false;
            }
            let user = User {
                id: uuid::Uuid::new_v4().to_string(),
                name: profile.name,
                email: profile.email,
                phone: profile.phone,
                role: profile.role,
                profile_image: None,
            };
            accounts.insert(key, Account { user: user.clone(), password: profile.password });
            user
        };
        info!(user_id = %user.id, role = ?user.role, "Account created");
        self.set_current(Some(user));
        true
    }

    fn logout(&self) {
        self.set_current(None);
        info!("Signed out");
    }
}
