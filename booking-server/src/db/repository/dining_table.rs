//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "dining_table";

/// Default capacity when the create payload omits one
const DEFAULT_CAPACITY: i32 = 4;

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dining tables ordered by display number
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY table_number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        let table: Option<DiningTable> = self.base.db().select(record_id).await?;
        Ok(table)
    }

    /// Find table by display number
    pub async fn find_by_table_number(&self, table_number: i32) -> RepoResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE table_number = $table_number LIMIT 1")
            .bind(("table_number", table_number))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        if data.table_number < 1 {
            return Err(RepoError::Validation(
                "table_number must be positive".to_string(),
            ));
        }
        let capacity = data.capacity.unwrap_or(DEFAULT_CAPACITY);
        if capacity < 1 {
            return Err(RepoError::Validation(
                "capacity must be at least 1".to_string(),
            ));
        }

        // Check duplicate display number
        if self
            .find_by_table_number(data.table_number)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                data.table_number
            )));
        }

        let table = DiningTable {
            id: None,
            table_number: data.table_number,
            capacity,
            is_available: true,
            created_at: Utc::now(),
        };

        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    /// Update a dining table
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        // Check duplicate display number if changing it
        if let Some(new_number) = data.table_number
            && new_number != existing.table_number
            && self.find_by_table_number(new_number).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                new_number
            )));
        }

        let table_number = data.table_number.unwrap_or(existing.table_number);
        let capacity = data.capacity.unwrap_or(existing.capacity);
        if capacity < 1 {
            return Err(RepoError::Validation(
                "capacity must be at least 1".to_string(),
            ));
        }
        let is_available = data.is_available.unwrap_or(existing.is_available);

        self.base
            .db()
            .query("UPDATE $record SET table_number = $table_number, capacity = $capacity, is_available = $is_available")
            .bind(("record", record_id))
            .bind(("table_number", table_number))
            .bind(("capacity", capacity))
            .bind(("is_available", is_available))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    /// Number of tables (seed check)
    pub async fn count(&self) -> RepoResult<usize> {
        let tables: Vec<DiningTable> = self.base.db().select(TABLE).await?;
        Ok(tables.len())
    }
}
