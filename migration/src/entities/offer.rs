use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub bonus: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub color: String,
    #[sea_orm(column_type = "Text")]
    pub logo: String,
    #[sea_orm(column_type = "Text")]
    pub link: String,
    /// JSON array of tag strings
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub clicks: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
