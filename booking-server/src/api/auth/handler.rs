//! Authentication Handlers
//!
//! Handles registration, login, session lookup and logout

use std::time::Duration;

use axum::{Json, extract::State};
use chrono::Utc;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Profile, ProfileCreate};
use crate::db::repository::ProfileRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::Role;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/register - 注册账号
///
/// 省略 role 时注册为 customer；邮箱重复返回 409。
/// 注册成功直接返回登录态 (令牌 + 用户信息)。
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&req.full_name, "full_name", MAX_NAME_LEN)?;
    validate_email(&req.email)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;
    if req.password.len() < 8 {
        return Err(AppError::validation("password must be at least 8 characters"));
    }

    let password_hash = Profile::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let repo = ProfileRepository::new(state.get_db());
    let profile = repo
        .create(ProfileCreate {
            full_name: req.full_name.trim().to_string(),
            email: req.email.trim().to_lowercase(),
            password_hash,
            role: req.role.unwrap_or(Role::Customer),
            created_at: Utc::now(),
        })
        .await?;

    tracing::info!(email = %profile.email, role = %profile.role, "Profile registered");

    login_response(&state, &profile)
}

/// POST /api/auth/login - 登录
///
/// Authenticates credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = ProfileRepository::new(state.get_db());
    let email = req.email.trim().to_lowercase();

    let profile = repo.find_by_email(&email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let profile = match profile {
        Some(p) => {
            let password_valid = p
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            p
        }
        None => {
            tracing::warn!(email = %email, "Login failed - profile not found");
            return Err(AppError::invalid_credentials());
        }
    };

    tracing::info!(
        email = %profile.email,
        role = %profile.role,
        "Profile logged in successfully"
    );

    login_response(&state, &profile)
}

/// GET /api/auth/session - 当前会话
///
/// 会话/身份读取：身份和角色完全来自请求携带的令牌
pub async fn session(user: CurrentUser) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        role: user.role,
    }))
}

/// POST /api/auth/logout - 登出
///
/// JWT 无服务端会话可销毁；丢弃调用者的购物车并记录登出
pub async fn logout(State(state): State<ServerState>, user: CurrentUser) -> AppResult<Json<bool>> {
    state.cart_store().clear(&user.id);
    tracing::info!(user_id = %user.id, "Profile logged out");
    Ok(Json(true))
}

/// Issue a token for a freshly authenticated profile
fn login_response(state: &ServerState, profile: &Profile) -> AppResult<Json<LoginResponse>> {
    let profile_id = profile
        .id
        .as_ref()
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::internal("Profile row missing id"))?;

    let token = state
        .get_jwt_service()
        .generate_token(&profile_id, &profile.full_name, &profile.email, profile.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: profile_id,
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            role: profile.role,
        },
    }))
}
