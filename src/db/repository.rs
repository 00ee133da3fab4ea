//! Contact record repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::contact::ContactStore;
use crate::errors::AppError;
use crate::models::{ContactMessage, ContactRecord};

/// Database repository for contact submissions.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a submission, stamping it with the current server time.
    pub async fn insert_contact(&self, message: &ContactMessage) -> Result<ContactRecord, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO contacts (id, name, email, subject, message, received_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactRecord {
            id,
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            received_at: now,
        })
    }

    /// List all submissions, newest first.
    pub async fn list_contacts(&self) -> Result<Vec<ContactRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, subject, message, received_at FROM contacts ORDER BY received_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(contact_from_row).collect())
    }

    /// Number of stored submissions.
    pub async fn count_contacts(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }
}

#[async_trait]
impl ContactStore for Repository {
    async fn save(&self, message: &ContactMessage) -> Result<ContactRecord, AppError> {
        self.insert_contact(message).await
    }
}

fn contact_from_row(row: &SqliteRow) -> ContactRecord {
    ContactRecord {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        subject: row.get("subject"),
        message: row.get("message"),
        received_at: row.get("received_at"),
    }
}
