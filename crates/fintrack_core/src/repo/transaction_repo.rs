//! Transaction store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append/list/delete APIs over the `transactions` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Transaction::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Listing is ordered newest-first (`created_at DESC, uuid ASC`).

use crate::db::DbError;
use crate::model::transaction::{Transaction, TransactionId, TransactionValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TXN_SELECT_SQL: &str = "SELECT
    uuid,
    amount,
    note,
    created_at
FROM transactions";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for transaction persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(TransactionValidationError),
    Db(DbError),
    NotFound(TransactionId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "transaction not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted transaction data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TransactionValidationError> for RepoError {
    fn from(value: TransactionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionListQuery {
    /// Keep only records created at or after this epoch-ms instant.
    pub since_epoch_ms: Option<i64>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Injected store interface for the ordered transaction collection.
///
/// Mutations are applied in arrival order by a single logical writer; the
/// repository imposes no locking of its own.
pub trait TransactionRepository {
    fn append_transaction(&self, txn: &Transaction) -> RepoResult<TransactionId>;
    fn get_transaction(&self, id: TransactionId) -> RepoResult<Option<Transaction>>;
    fn list_transactions(&self, query: &TransactionListQuery) -> RepoResult<Vec<Transaction>>;
    fn delete_transaction(&self, id: TransactionId) -> RepoResult<()>;
}

/// SQLite-backed transaction repository.
pub struct SqliteTransactionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTransactionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TransactionRepository for SqliteTransactionRepository<'_> {
    fn append_transaction(&self, txn: &Transaction) -> RepoResult<TransactionId> {
        txn.validate()?;

        self.conn.execute(
            "INSERT INTO transactions (uuid, amount, note, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                txn.uuid.to_string(),
                txn.amount,
                txn.note.as_str(),
                txn.created_at,
            ],
        )?;

        Ok(txn.uuid)
    }

    fn get_transaction(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TXN_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_transaction_row(row)?));
        }

        Ok(None)
    }

    fn list_transactions(&self, query: &TransactionListQuery) -> RepoResult<Vec<Transaction>> {
        let mut sql = format!("{TXN_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(since) = query.since_epoch_ms {
            sql.push_str(" AND created_at >= ?");
            bind_values.push(Value::Integer(since));
        }

        sql.push_str(" ORDER BY created_at DESC, uuid ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut transactions = Vec::new();

        while let Some(row) = rows.next()? {
            transactions.push(parse_transaction_row(row)?);
        }

        Ok(transactions)
    }

    fn delete_transaction(&self, id: TransactionId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM transactions WHERE uuid = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_transaction_row(row: &Row<'_>) -> RepoResult<Transaction> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in transactions.uuid"
        ))
    })?;

    let txn = Transaction {
        uuid,
        amount: row.get("amount")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    };
    txn.validate()?;
    Ok(txn)
}
