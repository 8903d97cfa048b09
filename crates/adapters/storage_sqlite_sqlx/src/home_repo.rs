//! `SQLite` implementation of [`HomeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use homelist_app::ports::HomeRepository;
use homelist_domain::error::{HomeListError, NotFoundError};
use homelist_domain::home::{Home, keys};
use homelist_domain::id::HomeId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Home`].
struct Wrapper(Home);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Home> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Home {
            id: Some(HomeId::from_raw(row.try_get(keys::ID)?)),
            area: row.try_get(keys::AREA)?,
            floor: row.try_get(keys::FLOOR)?,
            rooms: row.try_get(keys::ROOMS)?,
            price: row.try_get(keys::PRICE)?,
            currency: row.try_get(keys::CURRENCY)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO homes (area, floor, rooms, price, currency) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, area, floor, rooms, price, currency FROM homes WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, area, floor, rooms, price, currency FROM homes ORDER BY id";
const UPDATE: &str =
    "UPDATE homes SET area = ?, floor = ?, rooms = ?, price = ?, currency = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM homes WHERE id = ?";
const DELETE_ALL: &str = "DELETE FROM homes";

fn not_found(id: impl ToString) -> HomeListError {
    NotFoundError {
        entity: "Home",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed home repository.
pub struct SqliteHomeRepository {
    pool: SqlitePool,
}

impl SqliteHomeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HomeRepository for SqliteHomeRepository {
    fn create(&self, mut home: Home) -> impl Future<Output = Result<Home, HomeListError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&home.area)
                .bind(&home.floor)
                .bind(&home.rooms)
                .bind(&home.price)
                .bind(&home.currency)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            home.id = Some(HomeId::from_raw(result.last_insert_rowid()));
            Ok(home)
        }
    }

    fn get_by_id(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<Home>, HomeListError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomeListError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, home: Home) -> impl Future<Output = Result<Home, HomeListError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = home.id.ok_or_else(|| not_found("<unassigned>"))?;

            let result = sqlx::query(UPDATE)
                .bind(&home.area)
                .bind(&home.floor)
                .bind(&home.rooms)
                .bind(&home.price)
                .bind(&home.currency)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(id));
            }
            Ok(home)
        }
    }

    fn delete(&self, id: HomeId) -> impl Future<Output = Result<bool, HomeListError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete_all(&self) -> impl Future<Output = Result<u64, HomeListError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_ALL)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}
