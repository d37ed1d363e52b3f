//! # Authorization Gate
//!
//! The owner fixed at construction decides who may post listings.

use crate::errors::ReviewLedgerError;
use shared_types::entities::Address;
use std::collections::HashSet;

/// Owner plus the set of authorized listers.
#[derive(Debug, Clone)]
pub struct ListerRegistry {
    owner: Address,
    listers: HashSet<Address>,
}

impl ListerRegistry {
    /// Registry with no listers.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            listers: HashSet::new(),
        }
    }

    /// The deploying account.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Whether `account` may create listings.
    #[must_use]
    pub fn is_authorized(&self, account: &Address) -> bool {
        self.listers.contains(account)
    }

    /// Number of authorized listers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listers.len()
    }

    /// True when nobody is authorized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listers.is_empty()
    }

    /// Fails unless `caller` is the owner.
    pub fn require_owner(&self, caller: Address) -> Result<(), ReviewLedgerError> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(ReviewLedgerError::Unauthorized {
                caller,
                role: "the owner",
            })
        }
    }

    /// Fails unless `caller` is an authorized lister.
    pub fn require_lister(&self, caller: Address) -> Result<(), ReviewLedgerError> {
        if self.is_authorized(&caller) {
            Ok(())
        } else {
            Err(ReviewLedgerError::Unauthorized {
                caller,
                role: "an authorized lister",
            })
        }
    }

    /// Adds `lister`. Returns false if it was already present.
    pub fn authorize(&mut self, lister: Address) -> bool {
        self.listers.insert(lister)
    }
}
