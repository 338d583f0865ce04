use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Usuarios::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Usuarios::Name).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Phone).string().not_null())
                    .col(ColumnDef::new(Usuarios::BirthDate).date().not_null())
                    .col(ColumnDef::new(Usuarios::Gender).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::Rfc)
                            .string_len(13)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Name,
    Email,
    Phone,
    BirthDate,
    Gender,
    Rfc,
    CreatedAt,
    UpdatedAt,
}
