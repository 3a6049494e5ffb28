// In-memory document store
// Decision: RwLock<HashMap> per collection; the catalogue is small and
// read-heavy, so coarse per-collection locks are enough
// Decision: create paths hash passwords so plaintext never reaches a row

use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::{
    AdminRow, CreateAdmin, CreateFort, CreateUser, FortRow, UpdateFort, UserRow,
};
use super::password::hash_password;

/// In-memory store for users, admins, and forts.
///
/// Stands in for the external document database; email uniqueness is scoped
/// per collection, fort names are unique.
#[derive(Default)]
pub struct Database {
    users: RwLock<HashMap<Uuid, UserRow>>,
    admins: RwLock<HashMap<Uuid, AdminRow>>,
    forts: RwLock<HashMap<Uuid, FortRow>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Users =====

    /// Create a user; returns None when the email is already registered
    pub fn create_user(&self, input: CreateUser) -> Result<Option<UserRow>> {
        let password_hash = hash_password(&input.password)?;
        let mut users = self.users.write();

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&input.email))
        {
            return Ok(None);
        }

        let now = Utc::now();
        let row = UserRow {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(row.id, row.clone());
        Ok(Some(row))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<UserRow> {
        self.users
            .read()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    // ===== Admins =====

    /// Create an admin; returns None when the email is already registered
    pub fn create_admin(&self, input: CreateAdmin) -> Result<Option<AdminRow>> {
        let password_hash = hash_password(&input.password)?;
        let mut admins = self.admins.write();

        if admins
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(&input.email))
        {
            return Ok(None);
        }

        let now = Utc::now();
        let row = AdminRow {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        admins.insert(row.id, row.clone());
        Ok(Some(row))
    }

    pub fn find_admin_by_email(&self, email: &str) -> Option<AdminRow> {
        self.admins
            .read()
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    // ===== Forts =====

    /// Create a fort; returns None when the name is already taken
    pub fn create_fort(&self, input: CreateFort) -> Result<Option<FortRow>> {
        let mut forts = self.forts.write();

        if forts.values().any(|f| f.name == input.name) {
            return Ok(None);
        }

        let row = FortRow {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            location: input.location,
            district: input.district,
            history: input.history,
            image_url: input.image_url.unwrap_or_default(),
            created_at: Utc::now(),
        };
        forts.insert(row.id, row.clone());
        Ok(Some(row))
    }

    pub fn get_fort(&self, id: Uuid) -> Option<FortRow> {
        self.forts.read().get(&id).cloned()
    }

    /// List all forts sorted by name
    pub fn list_forts(&self) -> Vec<FortRow> {
        let mut forts: Vec<FortRow> = self.forts.read().values().cloned().collect();
        forts.sort_by(|a, b| a.name.cmp(&b.name));
        forts
    }

    /// Apply a partial update; returns None when the fort does not exist
    pub fn update_fort(&self, id: Uuid, update: UpdateFort) -> Option<FortRow> {
        let mut forts = self.forts.write();
        let row = forts.get_mut(&id)?;

        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(location) = update.location {
            row.location = location;
        }
        if let Some(district) = update.district {
            row.district = district;
        }
        if let Some(history) = update.history {
            row.history = history;
        }
        if let Some(image_url) = update.image_url {
            row.image_url = image_url;
        }

        Some(row.clone())
    }

    /// Delete a fort; returns true when a row was removed
    pub fn delete_fort(&self, id: Uuid) -> bool {
        self.forts.write().remove(&id).is_some()
    }

    /// Insert-or-update a fort keyed by name.
    ///
    /// Existing records keep their image_url when it is already set; all other
    /// fields are overwritten. Used by the idempotent seed endpoint.
    pub fn upsert_fort_by_name(&self, input: CreateFort) -> Result<FortRow> {
        let mut forts = self.forts.write();

        let existing_id = forts
            .values()
            .find(|f| f.name == input.name)
            .map(|f| f.id);

        let row = match existing_id {
            Some(id) => {
                let row = forts
                    .get_mut(&id)
                    .ok_or_else(|| anyhow::anyhow!("fort row vanished during upsert"))?;
                row.description = input.description;
                row.location = input.location;
                row.district = input.district;
                row.history = input.history;
                if row.image_url.is_empty() {
                    row.image_url = input.image_url.unwrap_or_default();
                }
                row.clone()
            }
            None => {
                let row = FortRow {
                    id: Uuid::now_v7(),
                    name: input.name,
                    description: input.description,
                    location: input.location,
                    district: input.district,
                    history: input.history,
                    image_url: input.image_url.unwrap_or_default(),
                    created_at: Utc::now(),
                };
                forts.insert(row.id, row.clone());
                row
            }
        };
        Ok(row)
    }
}
