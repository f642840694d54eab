use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{batch, errors};

/// Accepted quality-control outcomes, case-sensitive.
pub const QUALITY_CONTROL_STATES: [&str; 2] = ["APPROVED", "REJECTED"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transformation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub batch_id: Uuid,
    pub washing_process: String,
    pub washing_date: DateTimeWithTimeZone,
    pub packaging_process: String,
    pub packaging_date: DateTimeWithTimeZone,
    pub quality_control: String,
    pub quality_notes: Option<String>,
    pub registered_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Batch }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Batch => Entity::belongs_to(batch::Entity)
                .from(Column::BatchId)
                .to(batch::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    batch_id: Uuid,
    washing_process: &str,
    washing_date: DateTimeWithTimeZone,
    packaging_process: &str,
    packaging_date: DateTimeWithTimeZone,
    quality_control: &str,
    quality_notes: Option<String>,
) -> Result<Model, errors::ModelError> {
    if !QUALITY_CONTROL_STATES.contains(&quality_control) {
        return Err(errors::ModelError::Validation("invalid quality control state".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        batch_id: Set(batch_id),
        washing_process: Set(washing_process.to_string()),
        washing_date: Set(washing_date),
        packaging_process: Set(packaging_process.to_string()),
        packaging_date: Set(packaging_date),
        quality_control: Set(quality_control.to_string()),
        quality_notes: Set(quality_notes),
        registered_at: Set(chrono::Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Transformations of one batch, most recent packaging first.
pub async fn for_batch(db: &DatabaseConnection, batch_id: Uuid) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::BatchId.eq(batch_id))
        .order_by_desc(Column::PackagingDate)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::PackagingDate)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
