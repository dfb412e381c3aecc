use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(SpaceEventType::Enum)
                    .values([SpaceEventType::Launch, SpaceEventType::Landing])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpaceEvent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpaceEvent::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(SpaceEvent::Name))
                    .col(date(SpaceEvent::Date))
                    .col(text_null(SpaceEvent::Description))
                    .col(blob_null(SpaceEvent::Photo))
                    .col(string_null(SpaceEvent::PhotoContentType))
                    .col(
                        ColumnDef::new(SpaceEvent::Type)
                            .enumeration(
                                SpaceEventType::Enum,
                                [SpaceEventType::Launch, SpaceEventType::Landing],
                            )
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_space_event_date")
                    .table(SpaceEvent::Table)
                    .col(SpaceEvent::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpaceEvent::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(SpaceEventType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SpaceEvent {
    Table,
    Id,
    Name,
    Date,
    Description,
    Photo,
    PhotoContentType,
    Type,
}

#[derive(DeriveIden)]
enum SpaceEventType {
    #[sea_orm(iden = "space_event_type")]
    Enum,
    #[sea_orm(iden = "LAUNCH")]
    Launch,
    #[sea_orm(iden = "LANDING")]
    Landing,
}
