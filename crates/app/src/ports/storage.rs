//! Storage port — repository trait for persisting homes.

use std::future::Future;

use homelist_domain::error::HomeListError;
use homelist_domain::home::Home;
use homelist_domain::id::HomeId;

/// Repository for persisting and querying [`Home`]s.
pub trait HomeRepository {
    /// Insert a new home and return it with its storage-assigned id.
    fn create(&self, home: Home) -> impl Future<Output = Result<Home, HomeListError>> + Send;

    /// Get a home by its unique identifier.
    fn get_by_id(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<Home>, HomeListError>> + Send;

    /// Get all homes, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomeListError>> + Send;

    /// Write every content field of an already persisted home.
    ///
    /// Fails with [`HomeListError::NotFound`] when the row no longer exists.
    fn update(&self, home: Home) -> impl Future<Output = Result<Home, HomeListError>> + Send;

    /// Delete a home by id. Resolves to `false` when nothing was removed.
    fn delete(&self, id: HomeId) -> impl Future<Output = Result<bool, HomeListError>> + Send;

    /// Delete every home, returning how many rows were removed.
    fn delete_all(&self) -> impl Future<Output = Result<u64, HomeListError>> + Send;
}
