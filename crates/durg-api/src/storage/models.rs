// Storage row types and write payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered site visitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 hash, never serialized out of the storage layer
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalogue administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fort record in the public catalogue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FortRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub district: String,
    pub history: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user (plaintext password, hashed by the store)
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Payload for creating an admin
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for creating a fort
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFort {
    pub name: String,
    pub description: String,
    pub location: String,
    pub district: String,
    pub history: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Partial update for a fort; unset fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateFort {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub district: Option<String>,
    pub history: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}
