use crate::stores::AccountStorage;
use crate::{Account, Error};

const BUCKETS: usize = 10;

/// Bucketed-vector backend: accounts are partitioned into ten vectors by
/// the leading digit of the account number, approximating a fixed hash
/// bucketing scheme with zero hashing cost.
///
/// `add` appends to the matching bucket; duplicates coexist. `find` scans
/// only the matching bucket, comparing full numbers, and returns the first
/// match in insertion order.
///
/// A number whose first character is not '0'..'9' has no bucket:
/// `add` rejects it with [`Error::InvalidAccountNumber`], and `find`
/// returns `None` since such a number can never have been stored.
#[derive(Default)]
pub struct BucketedStorage {
    buckets: [Vec<Account>; BUCKETS],
}

impl BucketedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket index for a number, from its leading decimal digit.
    fn bucket_index(number: &str) -> Result<usize, Error> {
        match number.as_bytes().first() {
            Some(byte @ b'0'..=b'9') => Ok((byte - b'0') as usize),
            _ => Err(Error::InvalidAccountNumber),
        }
    }
}

impl AccountStorage for BucketedStorage {
    fn add(&mut self, account: Account) -> Result<(), Error> {
        let index = Self::bucket_index(account.number())?;
        self.buckets[index].push(account);
        Ok(())
    }

    fn find(&mut self, number: &str) -> Option<&Account> {
        let index = Self::bucket_index(number).ok()?;
        self.buckets[index]
            .iter()
            .find(|account| account.number() == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_store_is_empty() {
        let mut store = BucketedStorage::new();
        assert!(store.find("0000000001").is_none());
    }

    #[test]
    fn test_add_then_find() {
        let mut store = BucketedStorage::new();
        store
            .add(Account::with_balance("1000000001", dec!(42)))
            .unwrap();

        let account = store.find("1000000001").unwrap();
        assert_eq!(account.number(), "1000000001");
        assert_eq!(account.balance(), dec!(42));
    }

    #[test]
    fn test_never_found_through_wrong_bucket() {
        let mut store = BucketedStorage::new();
        // One account per leading digit, identical suffix.
        for digit in 0..10 {
            store
                .add(Account::with_balance(
                    format!("{digit}000000001"),
                    Decimal::from(digit),
                ))
                .unwrap();
        }

        for digit in 0u32..10 {
            let account = store.find(&format!("{digit}000000001")).unwrap();
            assert_eq!(account.balance(), Decimal::from(digit));
        }
        // Absent number with a valid leading digit scans only its own bucket.
        assert!(store.find("5000000002").is_none());
    }

    #[test]
    fn test_duplicates_coexist_first_wins() {
        let mut store = BucketedStorage::new();
        store
            .add(Account::with_balance("3000000001", dec!(100)))
            .unwrap();
        store
            .add(Account::with_balance("3000000001", dec!(200)))
            .unwrap();

        // Linear scan returns the first match in insertion order.
        let account = store.find("3000000001").unwrap();
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_add_rejects_non_digit_leading_character() {
        let mut store = BucketedStorage::new();
        assert_eq!(
            store.add(Account::new("notfound")),
            Err(Error::InvalidAccountNumber)
        );
        assert_eq!(store.add(Account::new("")), Err(Error::InvalidAccountNumber));
    }

    #[test]
    fn test_find_malformed_number_is_absent() {
        let mut store = BucketedStorage::new();
        store.add(Account::new("0000000001")).unwrap();
        assert!(store.find("notfound").is_none());
        assert!(store.find("").is_none());
    }
}
