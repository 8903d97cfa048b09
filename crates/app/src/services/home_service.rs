//! Home service — use-cases behind the `/homes` resource.

use homelist_domain::error::{HomeListError, NotFoundError};
use homelist_domain::home::{Home, HomePatch};
use homelist_domain::id::HomeId;

use crate::ports::HomeRepository;

/// Application service for home CRUD operations.
pub struct HomeService<R> {
    repo: R,
}

fn not_found(id: HomeId) -> HomeListError {
    NotFoundError {
        entity: "Home",
        id: id.to_string(),
    }
    .into()
}

impl<R: HomeRepository> HomeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every home.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_homes(&self) -> Result<Vec<Home>, HomeListError> {
        self.repo.get_all().await
    }

    /// Persist a new home. Any id carried by `home` is discarded.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, home), fields(area = %home.area, price = %home.price))]
    pub async fn create_home(&self, mut home: Home) -> Result<Home, HomeListError> {
        home.id = None;
        let created = self.repo.create(home).await?;
        tracing::debug!(id = ?created.id, "home created");
        Ok(created)
    }

    /// Look up a home by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeListError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_home(&self, id: HomeId) -> Result<Home, HomeListError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Overwrite the fields present in `patch`, leaving the others untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HomeListError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_home(&self, id: HomeId, patch: HomePatch) -> Result<Home, HomeListError> {
        let mut home = self.get_home(id).await?;
        if patch.is_empty() {
            return Ok(home);
        }
        home.apply(patch);
        self.repo.update(home).await
    }

    /// Overwrite every content field with those of `replacement`, keeping `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeListError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, replacement))]
    pub async fn replace_home(&self, id: HomeId, replacement: Home) -> Result<Home, HomeListError> {
        let mut home = self.get_home(id).await?;
        home.replace_content(replacement);
        self.repo.update(home).await
    }

    /// Delete a home by id.
    ///
    /// # Errors
    ///
    /// Returns [`HomeListError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_home(&self, id: HomeId) -> Result<(), HomeListError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Delete every home. Succeeds on an empty table.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn clear_homes(&self) -> Result<u64, HomeListError> {
        let removed = self.repo.delete_all().await?;
        tracing::info!(removed, "cleared homes");
        Ok(removed)
    }
}
