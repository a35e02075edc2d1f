use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A single employment record. Wire names are the camelCase forms so rows
/// can be returned to HTTP clients as-is; dates serialize as ISO-8601.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub location_city: String,
    pub address: String,
    pub date_of_birth: Date,
    pub telephone: String,
    pub position_title: String,
    pub hire_date: Date,
    #[sea_orm(unique)]
    pub email: String,
    pub salary: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations")
    }
}

impl ActiveModelBehavior for ActiveModel {}
