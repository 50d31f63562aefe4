use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub client: String,

    /// One of "Civil", "Penal", "Laboral", "Mercantil"
    pub case_type: String,

    /// ISO date (YYYY-MM-DD)
    pub start_date: String,

    /// One of "En Progreso", "Ganado", "Perdido"
    pub status: String,

    /// Owning username when owner scoping is enabled, NULL otherwise.
    /// Immutable once set; there is no update path for cases.
    pub owner: Option<String>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
