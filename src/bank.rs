use crate::stores::AccountStorage;
use crate::{Account, Error};

/// Thin facade over a single storage backend.
///
/// A bank is constructed with exactly one backend and keeps it for its
/// whole lifetime; callers pick the strategy once, up front.
pub struct Bank<S> {
    storage: S,
}

impl<S: AccountStorage> Bank<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Opens a zero-balance account under the given number.
    pub fn add_account(&mut self, number: impl Into<String>) -> Result<(), Error> {
        self.storage.add(Account::new(number))
    }

    /// Stores an already-constructed account, e.g. one read from CSV.
    pub fn add(&mut self, account: Account) -> Result<(), Error> {
        self.storage.add(account)
    }

    /// Looks up an account by number.
    pub fn account(&mut self, number: &str) -> Option<&Account> {
        self.storage.find(number)
    }

    /// The backend, for inspecting instrumentation counters.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
