use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_uniq(Player::Tag))
                    .col(string(Player::DisplayName))
                    .col(integer(Player::CurrentTrophies))
                    .col(integer(Player::BaselineTrophies))
                    .col(string(Player::ClubTag))
                    .col(timestamp_with_time_zone(Player::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Player {
    Table,
    Id,
    Tag,
    DisplayName,
    CurrentTrophies,
    BaselineTrophies,
    ClubTag,
    LastUpdated,
}
