//! PostgreSQL adapter for DocumentStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde_json::{Map, Value};

use crate::domain::ports::{generate_document_id, DocumentStore, StoredDocument};
use crate::entity::documents;
use crate::error::StoreError;

/// PostgreSQL implementation of DocumentStore, one JSONB row per document
pub struct PostgresDocumentStore {
    db: DatabaseConnection,
}

impl PostgresDocumentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Classify a database error for the facade's fallback policy
pub(crate) fn map_db_err(e: DbErr) -> StoreError {
    let message = e.to_string();
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unreachable(message),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound(message),
        // SQLSTATE 42501 (insufficient_privilege)
        _ if message.to_lowercase().contains("permission denied") => {
            StoreError::PermissionDenied(message)
        }
        _ => StoreError::Backend(message),
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let result = documents::Entity::find_by_id((collection.to_string(), id.to_string()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.data))
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let rows = documents::Entity::find()
            .filter(documents::Column::Collection.eq(collection))
            .order_by_asc(documents::Column::CreatedAt)
            .order_by_asc(documents::Column::DocId)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| StoredDocument::new(m.doc_id, m.data))
            .collect())
    }

    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<(), StoreError> {
        let now = Utc::now().fixed_offset();

        let model = documents::ActiveModel {
            collection: Set(collection.to_string()),
            doc_id: Set(id.to_string()),
            data: Set(data.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        documents::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([documents::Column::Collection, documents::Column::DocId])
                    .update_columns([documents::Column::Data, documents::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let row = documents::Entity::find_by_id((collection.to_string(), id.to_string()))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        let mut data = row.data;
        let Value::Object(target) = &mut data else {
            return Err(StoreError::Serialization(format!(
                "{}/{} is not an object",
                collection, id
            )));
        };
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }

        documents::ActiveModel {
            collection: Set(collection.to_string()),
            doc_id: Set(id.to_string()),
            data: Set(data),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        documents::Entity::delete_by_id((collection.to_string(), id.to_string()))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn create(&self, collection: &str, data: &Value) -> Result<String, StoreError> {
        let id = generate_document_id();
        let now = Utc::now().fixed_offset();

        documents::ActiveModel {
            collection: Set(collection.to_string()),
            doc_id: Set(id.clone()),
            data: Set(data.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(id)
    }
}
