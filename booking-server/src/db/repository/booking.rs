//! Booking Repository
//!
//! 引用字段 (customer/dining_table) 按 "table:id" 字符串存储，
//! 读取视图的连接在这里装配。

use std::collections::HashMap;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingDetail, DiningTable, Profile};
use shared::BookingStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find booking by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        let booking: Option<Booking> = self.base.db().select(record_id).await?;
        Ok(booking)
    }

    /// All bookings of one customer, newest first, references resolved
    pub async fn find_by_customer(&self, customer: &RecordId) -> RepoResult<Vec<BookingDetail>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking WHERE customer = $customer ORDER BY created_at DESC",
            )
            .bind(("customer", customer.to_string()))
            .await?
            .take(0)?;
        self.attach_details(bookings).await
    }

    /// All bookings, newest first, references resolved (owner dashboard)
    pub async fn find_all_with_details(&self) -> RepoResult<Vec<BookingDetail>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query("SELECT * FROM booking ORDER BY created_at DESC")
            .await?
            .take(0)?;
        self.attach_details(bookings).await
    }

    /// Insert a new booking row
    ///
    /// 调用方负责状态机约束 (创建时 status 固定 pending)
    pub async fn create(&self, booking: Booking) -> RepoResult<Booking> {
        let created: Option<Booking> = self.base.db().create(TABLE).content(booking).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Update the status column of one booking
    ///
    /// 单行更新，不触碰 dining_table.is_available
    pub async fn update_status(&self, id: &str, status: BookingStatus) -> RepoResult<Booking> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        self.base
            .db()
            .query("UPDATE $record SET status = $status")
            .bind(("record", record_id))
            .bind(("status", status))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Booking {} not found", id)))
    }

    /// Resolve customer and table references, memoizing per id
    async fn attach_details(&self, bookings: Vec<Booking>) -> RepoResult<Vec<BookingDetail>> {
        let mut profiles: HashMap<String, Profile> = HashMap::new();
        let mut tables: HashMap<String, DiningTable> = HashMap::new();
        let mut details = Vec::with_capacity(bookings.len());

        for booking in bookings {
            let customer_key = booking.customer.to_string();
            if !profiles.contains_key(&customer_key) {
                let profile: Option<Profile> =
                    self.base.db().select(booking.customer.clone()).await?;
                let profile = profile.ok_or_else(|| {
                    RepoError::NotFound(format!("Profile {} not found", customer_key))
                })?;
                profiles.insert(customer_key.clone(), profile);
            }

            let table_key = booking.dining_table.to_string();
            if !tables.contains_key(&table_key) {
                let table: Option<DiningTable> =
                    self.base.db().select(booking.dining_table.clone()).await?;
                let table = table.ok_or_else(|| {
                    RepoError::NotFound(format!("Dining table {} not found", table_key))
                })?;
                tables.insert(table_key.clone(), table);
            }

            details.push(BookingDetail {
                id: booking.id,
                customer: profiles[&customer_key].clone(),
                dining_table: tables[&table_key].clone(),
                booking_date: booking.booking_date,
                booking_time: booking.booking_time,
                number_of_guests: booking.number_of_guests,
                status: booking.status,
                created_at: booking.created_at,
            });
        }

        Ok(details)
    }
}
