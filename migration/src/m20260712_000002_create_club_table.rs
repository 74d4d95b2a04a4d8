use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string_uniq(Club::Tag))
                    .col(string(Club::DisplayName))
                    .col(integer_null(Club::TotalTrophies))
                    .col(integer(Club::MemberCount))
                    .col(integer_null(Club::MinTrophies))
                    .col(integer_null(Club::MaxTrophies))
                    .col(timestamp_with_time_zone(Club::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Club {
    Table,
    Id,
    Tag,
    DisplayName,
    TotalTrophies,
    MemberCount,
    MinTrophies,
    MaxTrophies,
    LastUpdated,
}
