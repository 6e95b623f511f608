use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    entity::audit_logs::{ActiveModel as AuditActive, Column as AuditCol, Entity as AuditLogs, Model as AuditModel},
    error::AppResult,
};

/// Append an audit row on `conn`. Pass a transaction to make the entry part of the same unit of work.
pub async fn log_audit<C>(
    conn: &C,
    entity: &str,
    entity_id: Option<Uuid>,
    action: &str,
    actor_id: Option<Uuid>,
    details: Option<Value>,
) -> AppResult<AuditModel>
where
    C: ConnectionTrait,
{
    let row = AuditActive {
        id: Set(Uuid::new_v4()),
        entity: Set(entity.to_owned()),
        entity_id: Set(entity_id),
        action: Set(action.to_owned()),
        actor_id: Set(actor_id),
        details: Set(details),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;

    Ok(row)
}

pub async fn list_audit_for<C>(conn: &C, entity: &str, entity_id: Uuid) -> AppResult<Vec<AuditModel>>
where
    C: ConnectionTrait,
{
    let rows = AuditLogs::find()
        .filter(AuditCol::Entity.eq(entity))
        .filter(AuditCol::EntityId.eq(entity_id))
        .order_by_asc(AuditCol::CreatedAt)
        .all(conn)
        .await?;
    Ok(rows)
}
