//! Setting entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use veyro_core::domain;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::Setting {
    fn from(model: Model) -> Self {
        Self {
            key: model.key,
            value: model.value,
        }
    }
}

impl From<domain::Setting> for ActiveModel {
    fn from(setting: domain::Setting) -> Self {
        Self {
            key: Set(setting.key),
            value: Set(setting.value),
        }
    }
}
