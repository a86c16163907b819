//! PostgreSQL implementation of MessageRepository
//!
//! The dispatch write (message + group links + recipient links) runs inside
//! a single transaction: every row commits or none do. A rollback that
//! cannot be confirmed is surfaced as a distinct partial-write failure so
//! callers know a consistency repair may be needed.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use sms_core::entities::{Message, MessageGroupLink, MessageRecipientLink};
use sms_core::traits::{MessageRepository, RepoResult};

use crate::models::{LinkedNameModel, MessageModel};

use super::error::{map_db_error, map_status_error, partial_write};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_dispatch(
        tx: &mut Transaction<'_, Postgres>,
        message: &Message,
        group_links: &[MessageGroupLink],
        recipient_links: &[MessageRecipientLink],
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r"
            INSERT INTO messages (id, content, status, total_recipients, delivered_count,
                                  sent_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(message.id)
        .bind(&message.content)
        .bind(message.status.as_str())
        .bind(message.total_recipients)
        .bind(message.delivered_count)
        .bind(message.sent_at)
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&mut **tx)
        .await?;

        for link in group_links {
            sqlx::query(
                r"
                INSERT INTO message_groups (id, message_id, group_id, created_at)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(link.id)
            .bind(link.message_id)
            .bind(link.group_id)
            .bind(link.created_at)
            .execute(&mut **tx)
            .await?;
        }

        for link in recipient_links {
            sqlx::query(
                r"
                INSERT INTO message_recipients (id, message_id, member_id, status,
                                                delivered_at, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(link.id)
            .bind(link.message_id)
            .bind(link.member_id)
            .bind(link.status.as_str())
            .bind(link.delivered_at)
            .bind(link.created_at)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, content, status, total_recipients, delivered_count,
                   sent_at, created_at, updated_at
            FROM messages
            ORDER BY created_at DESC, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(|model| Message::try_from(model).map_err(map_status_error))
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, content, status, total_recipients, delivered_count,
                   sent_at, created_at, updated_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(|model| Message::try_from(model).map_err(map_status_error))
            .transpose()
    }

    #[instrument(skip(self, group_links, recipient_links), fields(
        message_id = %message.id,
        groups = group_links.len(),
        recipients = recipient_links.len(),
    ))]
    async fn create_dispatch(
        &self,
        message: &Message,
        group_links: &[MessageGroupLink],
        recipient_links: &[MessageRecipientLink],
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        match Self::insert_dispatch(&mut tx, message, group_links, recipient_links).await {
            Ok(()) => tx.commit().await.map_err(map_db_error),
            Err(e) => {
                // Rollback keeps the failure clean; if even that fails, the
                // message row may have landed without its links
                if tx.rollback().await.is_err() {
                    return Err(partial_write(message.id));
                }
                Err(map_db_error(e))
            }
        }
    }

    #[instrument(skip(self, message_ids))]
    async fn group_names_for(&self, message_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, String)>> {
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }

        // One batched join for the full id set; the inner join drops links
        // whose group has been deleted
        let results = sqlx::query_as::<_, LinkedNameModel>(
            r"
            SELECT mg.message_id, g.name
            FROM message_groups mg
            JOIN groups g ON g.id = mg.group_id
            WHERE mg.message_id = ANY($1)
            ORDER BY g.name, g.id
            ",
        )
        .bind(message_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (row.message_id, row.name))
            .collect())
    }

    #[instrument(skip(self, message_ids))]
    async fn recipient_names_for(&self, message_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, String)>> {
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, LinkedNameModel>(
            r"
            SELECT mr.message_id, m.name
            FROM message_recipients mr
            JOIN members m ON m.id = mr.member_id
            WHERE mr.message_id = ANY($1)
            ORDER BY m.name, m.id
            ",
        )
        .bind(message_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (row.message_id, row.name))
            .collect())
    }
}
