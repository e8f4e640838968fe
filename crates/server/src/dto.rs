//! Wire representation of a store and its explicit mapping to the entity.

use models::store::{self, NewStore};
use serde::{Deserialize, Serialize};

/// JSON body exchanged on `/api/store`.
///
/// Keys are PascalCase (`Id`, `Name`, ...); camelCase keys are accepted on
/// input as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreDto {
    #[serde(default, alias = "id")]
    pub id: i32,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(default, alias = "address")]
    pub address: Option<String>,
    #[serde(default, alias = "city")]
    pub city: Option<String>,
    #[serde(default, alias = "phone")]
    pub phone: Option<String>,
}

impl From<store::Model> for StoreDto {
    fn from(m: store::Model) -> Self {
        StoreDto { id: m.id, name: m.name, address: m.address, city: m.city, phone: m.phone }
    }
}

impl From<StoreDto> for store::Model {
    fn from(d: StoreDto) -> Self {
        store::Model { id: d.id, name: d.name, address: d.address, city: d.city, phone: d.phone }
    }
}

/// Create input: the caller's `Id` is dropped, the database assigns one.
impl From<StoreDto> for NewStore {
    fn from(d: StoreDto) -> Self {
        NewStore { name: d.name, address: d.address, city: d.city, phone: d.phone }
    }
}
