use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{DataError, DataResult};

/// Records exchanged in one sync round, grouped by what happened to them.
///
/// Created and updated entries carry full record payloads; deleted entries
/// carry only the record ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaData<C = Value, U = Value, D = String> {
    pub created: Vec<C>,
    pub updated: Vec<U>,
    pub deleted: Vec<D>,
}

impl<C, U, D> DeltaData<C, U, D> {
    pub fn new(created: Vec<C>, updated: Vec<U>, deleted: Vec<D>) -> Self {
        Self {
            created,
            updated,
            deleted,
        }
    }

    /// Total number of records across all three groups.
    pub fn size(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<C, U, D> Default for DeltaData<C, U, D> {
    fn default() -> Self {
        Self {
            created: Vec::new(),
            updated: Vec::new(),
            deleted: Vec::new(),
        }
    }
}

/// What a delta record says happened to it on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Create,
    Update,
    Delete,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncAction::Create => "create",
            SyncAction::Update => "update",
            SyncAction::Delete => "delete",
        }
    }
}

/// Per-push state handed to every delta callback.
#[derive(Debug, Clone)]
pub struct SyncContext {
    pub last_pushed_at: DateTime<Utc>,
}

/// Seam for entities that collect server-side changes for a client.
///
/// Implementors own the queries; the trait only fixes the shape of the
/// exchange. `Conn` is whatever handle the storage layer uses.
pub trait SyncToClient {
    type Conn;

    /// Collect records created, updated and deleted since `last_sync_time`.
    fn get_delta_records(
        last_sync_time: DateTime<Utc>,
        conn: &mut Self::Conn,
    ) -> DataResult<DeltaData>;
}

/// Seam for entities that apply client deltas to the server store.
///
/// Implement the three per-action hooks; `apply_delta_changes` drives them
/// over a whole delta. Transaction scope belongs to the caller's `Conn`,
/// so a failed push can be rolled back as one unit.
pub trait SyncToServer {
    type Conn;

    /// Rewrite a record before it is applied. The default keeps the
    /// record as-is; implementors override this to rename fields, fill
    /// server-side columns and the like.
    fn transform_delta(
        _ctx: &SyncContext,
        _action: SyncAction,
        _data: &Value,
    ) -> DataResult<Option<Value>> {
        Ok(None)
    }

    fn create_from_delta(
        ctx: &SyncContext,
        conn: &mut Self::Conn,
        data: &Map<String, Value>,
    ) -> DataResult<()>;

    fn update_from_delta(
        ctx: &SyncContext,
        conn: &mut Self::Conn,
        data: &Map<String, Value>,
    ) -> DataResult<()>;

    fn delete_from_delta(ctx: &SyncContext, conn: &mut Self::Conn, id: &str) -> DataResult<()>;

    /// Apply a whole delta: created records first, then updates, then
    /// deletes. The first hook error aborts the run and propagates.
    fn apply_delta_changes(
        delta: &DeltaData,
        last_pushed_at: DateTime<Utc>,
        conn: &mut Self::Conn,
    ) -> DataResult<()> {
        let ctx = SyncContext { last_pushed_at };

        for record in &delta.created {
            let data = prepare_record::<Self>(&ctx, SyncAction::Create, record)?;
            Self::create_from_delta(&ctx, conn, as_object(SyncAction::Create, &data)?)?;
        }

        for record in &delta.updated {
            let data = prepare_record::<Self>(&ctx, SyncAction::Update, record)?;
            Self::update_from_delta(&ctx, conn, as_object(SyncAction::Update, &data)?)?;
        }

        for id in &delta.deleted {
            Self::delete_from_delta(&ctx, conn, id)?;
        }

        Ok(())
    }
}

// Validates the id field and runs the transform hook for one record.
fn prepare_record<S: SyncToServer + ?Sized>(
    ctx: &SyncContext,
    action: SyncAction,
    record: &Value,
) -> DataResult<Value> {
    if let Some(id) = record.as_object().and_then(|map| map.get("id")) {
        let empty = match id {
            Value::Null => true,
            Value::String(id) => id.is_empty(),
            _ => false,
        };
        if empty {
            return Err(DataError::invalid_id(
                "empty string not allowed for id field",
            ));
        }
    }

    let transformed = S::transform_delta(ctx, action, record)?;
    Ok(transformed.unwrap_or_else(|| record.clone()))
}

fn as_object(action: SyncAction, data: &Value) -> DataResult<&Map<String, Value>> {
    data.as_object().ok_or_else(|| {
        DataError::sync_push(format!("{} delta record must be an object", action.as_str()))
    })
}
