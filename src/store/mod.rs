use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use uuid::Uuid;

use crate::config::Config;
use crate::models::{AccountType, User, UserType};
use crate::wizard::{Draft, ProductType};

/* ----------------------------- Auth store ----------------------------- */

struct DemoUser {
    user: User,
    password_hash: String,
}

/// Mock authentication store backing the prototype's hard-coded user table.
/// No accounts are ever created or mutated; logout is a client-side token
/// discard, so the store itself stays read-only after construction.
pub struct AuthStore {
    users: Vec<DemoUser>,
}

const DEMO_PASSWORD: &str = "password123";
// Low cost: these are throwaway demo credentials, not real accounts.
const DEMO_HASH_COST: u32 = 4;

impl AuthStore {
    pub fn new() -> Self {
        let seed = [
            User {
                id: Uuid::from_u128(1),
                email: "user@example.com".to_string(),
                full_name: "John Doe".to_string(),
                phone_number: "+6281234567890".to_string(),
                user_type: UserType::Individual,
                account_type: AccountType::Savlo,
            },
            User {
                id: Uuid::from_u128(2),
                email: "business@example.com".to_string(),
                full_name: "Business Corp".to_string(),
                phone_number: "+6281234567891".to_string(),
                user_type: UserType::Business,
                account_type: AccountType::Savlo,
            },
        ];

        let users = seed
            .into_iter()
            .map(|user| DemoUser {
                password_hash: bcrypt::hash(DEMO_PASSWORD, DEMO_HASH_COST)
                    .unwrap_or_default(),
                user,
            })
            .collect();

        info!("✓ Auth store seeded with demo users");
        AuthStore { users }
    }

    /// Credential check behind the prototype's fixed simulated delay.
    /// Returns the matched profile, or `None` on any mismatch.
    pub async fn login(&self, email: &str, password: &str) -> Option<User> {
        tokio::time::sleep(Duration::from_millis(Config::login_delay_ms())).await;
        self.authenticate(email, password)
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.user.email == email)
            .filter(|u| bcrypt::verify(password, &u.password_hash).unwrap_or(false))
            .map(|u| u.user.clone())
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone())
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

/* ----------------------------- Draft store ----------------------------- */

type DraftKey = (Uuid, ProductType);

/// Transient wizard state, one draft per user and product. Purely in
/// memory: a process restart discards everything, matching the prototype's
/// page-refresh behavior.
pub struct DraftStore {
    drafts: Mutex<HashMap<DraftKey, Draft>>,
}

impl DraftStore {
    pub fn new() -> Self {
        DraftStore {
            drafts: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the user's draft for the product, creating one at step 1 if
    /// none exists yet.
    pub fn open(&self, user_id: Uuid, product: ProductType) -> Draft {
        let mut drafts = self.lock();
        drafts
            .entry((user_id, product))
            .or_insert_with(|| Draft::new(product))
            .clone()
    }

    pub fn get(&self, user_id: Uuid, product: ProductType) -> Option<Draft> {
        self.lock().get(&(user_id, product)).cloned()
    }

    /// Runs `f` against the user's draft, returning `None` when no draft
    /// has been started.
    pub fn modify<R>(
        &self,
        user_id: Uuid,
        product: ProductType,
        f: impl FnOnce(&mut Draft) -> R,
    ) -> Option<R> {
        let mut drafts = self.lock();
        drafts.get_mut(&(user_id, product)).map(f)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<DraftKey, Draft>> {
        self.drafts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}
