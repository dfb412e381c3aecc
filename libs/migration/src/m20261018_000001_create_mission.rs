use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mission::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Mission::Name))
                    .col(text_null(Mission::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Mission {
    Table,
    Id,
    Name,
    Description,
}
