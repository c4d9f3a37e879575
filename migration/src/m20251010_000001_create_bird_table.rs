use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bird::Table)
                    .if_not_exists()
                    .col(string(Bird::Id).primary_key())
                    .col(string(Bird::Name))
                    .col(string(Bird::Breed))
                    .col(double(Bird::Age))
                    .col(timestamp_with_time_zone(Bird::CreatedAt))
                    .col(timestamp_with_time_zone(Bird::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bird::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bird {
    Table,
    Id,
    Name,
    Breed,
    Age,
    CreatedAt,
    UpdatedAt,
}
