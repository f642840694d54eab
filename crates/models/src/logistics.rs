use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{batch, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "logistics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub batch_id: Uuid,
    pub transport_temperature: Decimal,
    pub transport_started_at: DateTimeWithTimeZone,
    pub delivered_at: DateTimeWithTimeZone,
    pub retailer_name: String,
    pub retailer_address: String,
    pub notes: Option<String>,
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
    transport_temperature: Decimal,
    transport_started_at: DateTimeWithTimeZone,
    delivered_at: DateTimeWithTimeZone,
    retailer_name: &str,
    retailer_address: &str,
    notes: Option<String>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        batch_id: Set(batch_id),
        transport_temperature: Set(transport_temperature),
        transport_started_at: Set(transport_started_at),
        delivered_at: Set(delivered_at),
        retailer_name: Set(retailer_name.to_string()),
        retailer_address: Set(retailer_address.to_string()),
        notes: Set(notes),
        registered_at: Set(chrono::Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Logistics records of one batch, most recent delivery first.
pub async fn for_batch(db: &DatabaseConnection, batch_id: Uuid) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::BatchId.eq(batch_id))
        .order_by_desc(Column::DeliveredAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::DeliveredAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
