//! Inventory Store Port - Collection-scoped document store boundary
//!
//! The store is an external document database. Records live in named
//! collections, ids are assigned by the store on creation, and every
//! operation is asynchronous and may fail.

use std::fmt;

use gemdesk_domain::{InventoryItem, ItemData, ItemId};

/// Which store call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Create,
    List,
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::List => write!(f, "list"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A store operation failed.
///
/// Every variant is the same kind of failure from the caller's point of view;
/// the variants only carry the cause for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("Store {operation} failed: record {id} not found")]
    NotFound { operation: StoreOperation, id: String },

    /// The request never produced a response (network, timeout, DNS).
    #[error("Store {operation} failed: transport error: {message}")]
    Transport {
        operation: StoreOperation,
        message: String,
    },

    /// The store answered with an error status (permission, quota, bad request).
    #[error("Store {operation} failed: rejected with status {status}: {message}")]
    Rejected {
        operation: StoreOperation,
        status: u16,
        message: String,
    },

    /// The store answered with data we could not interpret.
    #[error("Store {operation} failed: malformed response: {message}")]
    Malformed {
        operation: StoreOperation,
        message: String,
    },

    /// The store is not usable at all (e.g. poisoned local state).
    #[error("Store {operation} failed: store unavailable: {message}")]
    Unavailable {
        operation: StoreOperation,
        message: String,
    },
}

impl StoreError {
    pub fn not_found(operation: StoreOperation, id: impl ToString) -> Self {
        Self::NotFound {
            operation,
            id: id.to_string(),
        }
    }

    pub fn transport(operation: StoreOperation, message: impl ToString) -> Self {
        Self::Transport {
            operation,
            message: message.to_string(),
        }
    }

    pub fn rejected(operation: StoreOperation, status: u16, message: impl ToString) -> Self {
        Self::Rejected {
            operation,
            status,
            message: message.to_string(),
        }
    }

    pub fn malformed(operation: StoreOperation, message: impl ToString) -> Self {
        Self::Malformed {
            operation,
            message: message.to_string(),
        }
    }

    pub fn unavailable(operation: StoreOperation, message: impl ToString) -> Self {
        Self::Unavailable {
            operation,
            message: message.to_string(),
        }
    }

    /// The store call that failed.
    pub fn operation(&self) -> StoreOperation {
        match self {
            Self::NotFound { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Rejected { operation, .. }
            | Self::Malformed { operation, .. }
            | Self::Unavailable { operation, .. } => *operation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Collection-scoped CRUD over the document store.
///
/// Implemented by infrastructure adapters (Firestore REST, in-memory).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait InventoryStorePort: Send + Sync {
    /// Persist `data` as a new record and return its store-assigned id.
    async fn create_record(&self, collection: &str, data: &ItemData)
        -> Result<ItemId, StoreError>;

    /// Full snapshot of the collection. No server-side filtering.
    async fn list_records(&self, collection: &str) -> Result<Vec<InventoryItem>, StoreError>;

    /// Overwrite every field of the record `id`. Fails if it does not exist.
    async fn update_record(
        &self,
        collection: &str,
        id: &ItemId,
        data: &ItemData,
    ) -> Result<(), StoreError>;

    /// Remove the record `id`. Fails if it does not exist.
    async fn delete_record(&self, collection: &str, id: &ItemId) -> Result<(), StoreError>;
}
