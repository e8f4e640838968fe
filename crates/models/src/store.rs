//! `stores` table: the persisted Store entity and its single-row operations.
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Descriptive fields of a store about to be inserted; the id comes from the database.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewStore {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl NewStore {
    /// Attach a database-assigned id.
    pub fn with_id(self, id: i32) -> Model {
        Model { id, name: self.name, address: self.address, city: self.city, phone: self.phone }
    }
}

impl From<NewStore> for ActiveModel {
    fn from(s: NewStore) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(s.name),
            address: Set(s.address),
            city: Set(s.city),
            phone: Set(s.phone),
        }
    }
}

/// All stores in ascending id order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, input: NewStore) -> Result<Model, ModelError> {
    let am: ActiveModel = input.into();
    Ok(am.insert(db).await?)
}

/// Overwrite every descriptive column of the row matching `store.id` in one
/// statement. Returns `None` when no row matched.
pub async fn update_by_id(db: &DatabaseConnection, store: Model) -> Result<Option<Model>, ModelError> {
    let res = Entity::update_many()
        .set(ActiveModel {
            id: NotSet,
            name: Set(store.name.clone()),
            address: Set(store.address.clone()),
            city: Set(store.city.clone()),
            phone: Set(store.phone.clone()),
        })
        .filter(Column::Id.eq(store.id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    Ok(Some(store))
}

/// Delete by id; true if a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
