//! Startup Seeding
//!
//! 空库启动时写入默认数据：店主账号、桌台布局和示例菜单。
//! 每一类只在对应表为空时写入，重启不会重复。

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{DiningTableCreate, MenuItemCreate, Profile, ProfileCreate};
use crate::db::repository::{DiningTableRepository, MenuItemRepository, ProfileRepository};
use crate::utils::AppError;
use shared::Role;

/// Default owner login when OWNER_EMAIL is not set
const DEFAULT_OWNER_EMAIL: &str = "owner@example.com";

/// Floor layout seeded into an empty database: (table_number, capacity)
const DEFAULT_TABLES: &[(i32, i32)] = &[
    (1, 2),
    (2, 2),
    (3, 4),
    (4, 4),
    (5, 4),
    (6, 6),
    (7, 6),
    (8, 8),
];

/// Seed defaults into an empty database
pub async fn seed_defaults(db: &Surreal<Db>) -> Result<(), AppError> {
    seed_owner(db).await?;
    seed_tables(db).await?;
    seed_menu(db).await?;
    Ok(())
}

/// Create the default owner account if no profile exists yet
async fn seed_owner(db: &Surreal<Db>) -> Result<(), AppError> {
    let repo = ProfileRepository::new(db.clone());
    if repo.count().await? > 0 {
        return Ok(());
    }

    let email = std::env::var("OWNER_EMAIL").unwrap_or_else(|_| DEFAULT_OWNER_EMAIL.into());
    let password = match std::env::var("OWNER_PASSWORD") {
        Ok(p) => p,
        Err(_) => {
            tracing::warn!(
                "⚠️  OWNER_PASSWORD not set, seeding owner account with default password 'changeme'"
            );
            "changeme".to_string()
        }
    };

    let password_hash = Profile::hash_password(&password)
        .map_err(|e| AppError::internal(format!("Failed to hash owner password: {e}")))?;

    repo.create(ProfileCreate {
        full_name: "Restaurant Owner".to_string(),
        email: email.clone(),
        password_hash,
        role: Role::Owner,
        created_at: Utc::now(),
    })
    .await?;

    tracing::info!(email = %email, "Seeded default owner account");
    Ok(())
}

/// Seed the default floor layout if no table exists yet
async fn seed_tables(db: &Surreal<Db>) -> Result<(), AppError> {
    let repo = DiningTableRepository::new(db.clone());
    if repo.count().await? > 0 {
        return Ok(());
    }

    for &(table_number, capacity) in DEFAULT_TABLES {
        repo.create(DiningTableCreate {
            table_number,
            capacity: Some(capacity),
        })
        .await?;
    }

    tracing::info!(count = DEFAULT_TABLES.len(), "Seeded default dining tables");
    Ok(())
}

/// Seed the sample menu if no item exists yet
async fn seed_menu(db: &Surreal<Db>) -> Result<(), AppError> {
    let repo = MenuItemRepository::new(db.clone());
    if repo.count().await? > 0 {
        return Ok(());
    }

    let samples = [
        MenuItemCreate {
            name: "Gourmet Burger".to_string(),
            description: Some("Juicy burger with premium beef".to_string()),
            price: rust_decimal::Decimal::new(15_99, 2),
            category: "Main Course".to_string(),
            image_url: None,
            is_available: Some(true),
        },
        MenuItemCreate {
            name: "Fresh Salad Bowl".to_string(),
            description: Some("Mixed greens with grilled chicken".to_string()),
            price: rust_decimal::Decimal::new(12_99, 2),
            category: "Salads".to_string(),
            image_url: None,
            is_available: Some(true),
        },
        MenuItemCreate {
            name: "Pasta Special".to_string(),
            description: Some("Homemade pasta with herbs".to_string()),
            price: rust_decimal::Decimal::new(14_99, 2),
            category: "Main Course".to_string(),
            image_url: None,
            is_available: Some(true),
        },
    ];

    for item in samples {
        repo.create(item).await?;
    }

    tracing::info!("Seeded sample menu items");
    Ok(())
}
