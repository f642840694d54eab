use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub cultivation_location: String,
    pub harvest_date: Date,
    pub notes: Option<String>,
    pub registered_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_code(db: &DatabaseConnection, code: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Code.eq(code))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn code_exists(db: &DatabaseConnection, code: &str) -> Result<bool, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::Code.eq(code))
        .count(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(found > 0)
}

/// All batches, most recent harvest first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::HarvestDate)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
