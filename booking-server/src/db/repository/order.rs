//! Order Repository
//!
//! customer 引用按 "table:id" 字符串存储，店主视图的连接在这里装配。

use std::collections::HashMap;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderDetail, Profile};
use shared::OrderStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "food_order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// All orders of one customer, newest first
    pub async fn find_by_customer(&self, customer: &RecordId) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM food_order WHERE customer = $customer ORDER BY created_at DESC",
            )
            .bind(("customer", customer.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// All orders, newest first, customer resolved (owner dashboard)
    pub async fn find_all_with_customer(&self) -> RepoResult<Vec<OrderDetail>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM food_order ORDER BY created_at DESC")
            .await?
            .take(0)?;

        let mut profiles: HashMap<String, Profile> = HashMap::new();
        let mut details = Vec::with_capacity(orders.len());

        for order in orders {
            let customer_key = order.customer.to_string();
            if !profiles.contains_key(&customer_key) {
                let profile: Option<Profile> =
                    self.base.db().select(order.customer.clone()).await?;
                let profile = profile.ok_or_else(|| {
                    RepoError::NotFound(format!("Profile {} not found", customer_key))
                })?;
                profiles.insert(customer_key.clone(), profile);
            }

            details.push(OrderDetail {
                id: order.id,
                customer: profiles[&customer_key].clone(),
                token_number: order.token_number,
                total_amount: order.total_amount,
                status: order.status,
                created_at: order.created_at,
            });
        }

        Ok(details)
    }

    /// Insert a new order row
    ///
    /// 调用方负责结账守卫 (非空购物车、总额计算、pending 初始状态)
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Update the status column of one order
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        self.base
            .db()
            .query("UPDATE $record SET status = $status")
            .bind(("record", record_id))
            .bind(("status", status))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }
}
