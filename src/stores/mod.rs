//! Storage layer for the account lookup benchmark. Provides three
//! interchangeable backends behind one capability trait:
//! - Ordered-map lookup ([`MapStorage`])
//! - Leading-digit buckets with linear scan ([`BucketedStorage`])
//! - Sort + binary search over a flat vector ([`SortedStorage`])
//!
//! Current implementation is optimized for synchronous, direct memory
//! access; all backends are single-threaded.

mod bucketed;
mod map;
mod sorted;

pub use bucketed::BucketedStorage;
pub use map::MapStorage;
pub use sorted::{SortStrategy, SortedStorage};

use crate::{Account, Error};

/// The capability every storage backend implements.
///
/// `find` takes `&mut self` because [`SortedStorage`] re-sorts its backing
/// vector inside the lookup; the other backends never mutate on find.
pub trait AccountStorage {
    /// Makes the account findable by its number.
    ///
    /// Duplicate handling is backend-specific: [`MapStorage`] overwrites
    /// (last write wins), the vector backends append without any
    /// uniqueness check.
    fn add(&mut self, account: Account) -> Result<(), Error>;

    /// Looks up an account by number, returning a reference to the stored
    /// account, or `None` if no account with that number was added.
    fn find(&mut self, number: &str) -> Option<&Account>;
}
