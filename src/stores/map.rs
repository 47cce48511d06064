use std::collections::BTreeMap;

use crate::stores::AccountStorage;
use crate::{Account, Error};

/// Ordered-map backend: a `BTreeMap` keyed by account number.
///
/// `add` is an upsert, `find` is a direct O(log n) tree lookup — no scan
/// ever occurs, and an absent number is rejected immediately.
#[derive(Default)]
pub struct MapStorage {
    accounts: BTreeMap<String, Account>,
}

impl MapStorage {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }
}

impl AccountStorage for MapStorage {
    fn add(&mut self, account: Account) -> Result<(), Error> {
        self.accounts.insert(account.number().to_owned(), account);
        Ok(())
    }

    fn find(&mut self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }
}
