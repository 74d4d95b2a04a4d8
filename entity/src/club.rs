use sea_orm::entity::prelude::*;

/// One tracked club, keyed by the leaderboard tag.
///
/// Aggregate columns are nullable: NULL means the value could not be read
/// from the roster page, which is distinct from a true zero.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tag: String,
    pub display_name: String,
    pub total_trophies: Option<i32>,
    pub member_count: i32,
    pub min_trophies: Option<i32>,
    pub max_trophies: Option<i32>,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
