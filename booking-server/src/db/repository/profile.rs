//! Profile Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Profile, ProfileCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "profile";

#[derive(Clone)]
pub struct ProfileRepository {
    base: BaseRepository,
}

impl ProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find profile by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Profile>> {
        let record_id = BaseRepository::parse_id(id, TABLE)?;
        let profile: Option<Profile> = self.base.db().select(record_id).await?;
        Ok(profile)
    }

    /// Find profile by login email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM profile WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let profiles: Vec<Profile> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    /// Create a new profile
    ///
    /// 邮箱重复时拒绝，登录名必须唯一
    pub async fn create(&self, data: ProfileCreate) -> RepoResult<Profile> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Profile '{}' already exists",
                data.email
            )));
        }

        let created: Option<Profile> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create profile".to_string()))
    }

    /// Number of registered profiles (seed check)
    pub async fn count(&self) -> RepoResult<usize> {
        let profiles: Vec<Profile> = self.base.db().select(TABLE).await?;
        Ok(profiles.len())
    }
}
