use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    adapters::persistence::SqlitePersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

#[derive(FromRow)]
struct WaitlistRow {
    id: String,
    email: String,
    clinic_name: String,
    clinic_size: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<WaitlistRow> for WaitlistEntry {
    type Error = AppError;

    fn try_from(row: WaitlistRow) -> AppResult<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| AppError::Internal(format!("corrupt waitlist id {:?}: {e}", row.id)))?;

        Ok(WaitlistEntry {
            id,
            email: row.email,
            clinic_name: row.clinic_name,
            clinic_size: row.clinic_size,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl WaitlistRepo for SqlitePersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let _guard = self.write_lock.lock().await;

        let created = WaitlistEntry {
            id: Uuid::new_v4(),
            email: entry.email.clone(),
            clinic_name: entry.clinic_name.clone(),
            clinic_size: entry.clinic_size.clone(),
            created_at: Utc::now(),
        };

        let result = sqlx::query(
            r#"INSERT INTO waitlist (id, email, clinic_name, clinic_size, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
        )
        .bind(created.id.to_string())
        .bind(&created.email)
        .bind(&created.clinic_name)
        .bind(&created.clinic_size)
        .bind(created.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                info!(entry_id = %created.id, "Stored waitlist entry");
                Ok(created)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                debug!(email = %entry.email, "Rejected duplicate waitlist email");
                Err(AppError::DuplicateEmail)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        // rowid breaks created_at ties in insertion order; inserts are serialized.
        let rows = sqlx::query_as::<_, WaitlistRow>(
            r#"SELECT id, email, clinic_name, clinic_size, created_at
               FROM waitlist
               ORDER BY created_at DESC, rowid DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WaitlistEntry::try_from).collect()
    }
}
