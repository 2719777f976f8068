use anyhow::{Context, Result};
use rusqlite::{
    Connection, ErrorCode, OptionalExtension, Row, Transaction, TransactionBehavior, params,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::models::ToDoItem;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS to_do_items (
    title TEXT NOT NULL PRIMARY KEY,
    done INTEGER NOT NULL DEFAULT 0
)";

/// Result of a write that can be refused by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The item as persisted
    Written(ToDoItem),
    /// No item has the addressed title
    NotFound,
    /// The write would give two items the same title
    Conflict,
}

/// Shareable handle to the to-do database for use across async handlers
///
/// The handle only carries the database location. Every operation opens its
/// own connection and transaction on a blocking worker thread, commits when
/// the operation succeeds and rolls back on any other exit path.
#[derive(Clone)]
pub struct TodoDb {
    path: Arc<PathBuf>,
}

impl TodoDb {
    /// Open the database configured for this process
    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::open(config.database_path.clone()).await
    }

    /// Open the database at `path`, creating the file and the
    /// `to_do_items` table if they don't exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let db = Self {
            path: Arc::new(path.into()),
        };

        tracing::info!("Opening to-do database at: {}", db.path.display());
        db.with_session(TransactionBehavior::Immediate, |tx| {
            tx.execute_batch(CREATE_TABLE_SQL)
                .context("Failed to create to_do_items table")
        })
        .await?;
        tracing::info!("Table 'to_do_items' is ready");

        Ok(db)
    }

    /// List all items, or only those whose `done` flag matches the filter
    ///
    /// Items come back in the storage's natural order.
    pub async fn list(&self, done: Option<bool>) -> Result<Vec<ToDoItem>> {
        let items = self
            .with_session(TransactionBehavior::Deferred, move |tx| {
                let mut stmt = match done {
                    Some(_) => tx.prepare("SELECT title, done FROM to_do_items WHERE done = ?1"),
                    None => tx.prepare("SELECT title, done FROM to_do_items"),
                }
                .context("Failed to prepare list query")?;

                let rows = match done {
                    Some(done) => stmt.query_map(params![done], item_from_row),
                    None => stmt.query_map([], item_from_row),
                }
                .context("Failed to query to-do items")?;

                let items = rows
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .context("Failed to read to-do item row")?;
                Ok(items)
            })
            .await?;

        tracing::debug!("Listed {} items (done filter: {:?})", items.len(), done);
        Ok(items)
    }

    /// Insert a new item
    ///
    /// # Returns
    /// * `WriteOutcome::Written(item)` - the item was stored unchanged
    /// * `WriteOutcome::Conflict` - an item with the same title already exists
    pub async fn create(&self, item: ToDoItem) -> Result<WriteOutcome> {
        let title = item.title.clone();
        let outcome = self
            .with_session(TransactionBehavior::Immediate, move |tx| {
                let inserted = tx.execute(
                    "INSERT INTO to_do_items (title, done) VALUES (?1, ?2)",
                    params![item.title, item.done],
                );
                match inserted {
                    Ok(_) => Ok(WriteOutcome::Written(item)),
                    Err(err) if is_constraint_violation(&err) => Ok(WriteOutcome::Conflict),
                    Err(err) => Err(err).context("Failed to insert to-do item"),
                }
            })
            .await?;

        tracing::debug!("Create '{}': {:?}", title, outcome);
        Ok(outcome)
    }

    /// Read an item by its exact title
    ///
    /// # Returns
    /// * `Ok(Some(item))` - item found
    /// * `Ok(None)` - no item has that title
    pub async fn get_by_title(&self, title: &str) -> Result<Option<ToDoItem>> {
        let title = title.to_string();
        self.with_session(TransactionBehavior::Deferred, move |tx| {
            find_by_title(tx, &title)
        })
        .await
    }

    /// Overwrite both fields of the item currently titled `current_title`
    ///
    /// # Returns
    /// * `WriteOutcome::Written(item)` - the updated item
    /// * `WriteOutcome::NotFound` - no item has `current_title`
    /// * `WriteOutcome::Conflict` - the new title belongs to another item
    pub async fn update_by_title(
        &self,
        current_title: &str,
        new_item: ToDoItem,
    ) -> Result<WriteOutcome> {
        let current = current_title.to_string();
        let outcome = self
            .with_session(TransactionBehavior::Immediate, move |tx| {
                if find_by_title(tx, &current)?.is_none() {
                    return Ok(WriteOutcome::NotFound);
                }

                let updated = tx.execute(
                    "UPDATE to_do_items SET title = ?1, done = ?2 WHERE title = ?3",
                    params![new_item.title, new_item.done, current],
                );
                match updated {
                    Ok(_) => Ok(WriteOutcome::Written(new_item)),
                    Err(err) if is_constraint_violation(&err) => Ok(WriteOutcome::Conflict),
                    Err(err) => Err(err).context("Failed to update to-do item"),
                }
            })
            .await?;

        tracing::debug!("Update '{}': {:?}", current_title, outcome);
        Ok(outcome)
    }

    /// Perform a health check by executing a simple query
    pub async fn health_check(&self) -> Result<()> {
        let one: i64 = self
            .with_session(TransactionBehavior::Deferred, |tx| {
                tx.query_row("SELECT 1", [], |row| row.get(0))
                    .context("Failed to execute health check query")
            })
            .await?;

        if one == 1 {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned {}", one))
        }
    }

    /// Run `op` inside a fresh connection and transaction
    ///
    /// Writes pass `Immediate` so they take the write lock up front and
    /// concurrent writers queue on the busy timeout instead of failing
    /// mid-transaction. Reads pass `Deferred` and never wait on a writer.
    /// The transaction commits only when `op` returns `Ok`; an error or a
    /// panic drops it, which rolls it back.
    async fn with_session<T, F>(&self, behavior: TransactionBehavior, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Transaction<'_>) -> Result<T> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let mut conn = open_connection(&path)?;
            let tx = conn
                .transaction_with_behavior(behavior)
                .context("Failed to begin transaction")?;
            let value = op(&tx)?;
            tx.commit().context("Failed to commit transaction")?;
            Ok(value)
        })
        .await
        .context("Database session task failed")?
    }
}

fn open_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    conn.busy_timeout(BUSY_TIMEOUT)
        .context("Failed to set busy timeout")?;
    Ok(conn)
}

fn find_by_title(tx: &Transaction<'_>, title: &str) -> Result<Option<ToDoItem>> {
    tx.query_row(
        "SELECT title, done FROM to_do_items WHERE title = ?1",
        params![title],
        item_from_row,
    )
    .optional()
    .context("Failed to query to-do item by title")
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<ToDoItem> {
    Ok(ToDoItem {
        title: row.get(0)?,
        done: row.get(1)?,
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _) if inner.code == ErrorCode::ConstraintViolation
    )
}
