use sea_orm::entity::prelude::*;

/// One tracked player, keyed by the leaderboard tag.
///
/// `baseline_trophies` is the trophy count captured at the start of the
/// scoring period. Routine syncs overwrite `current_trophies` but never the
/// baseline; only the explicit baseline reset does.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tag: String,
    pub display_name: String,
    pub current_trophies: i32,
    pub baseline_trophies: i32,
    pub club_tag: String,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
