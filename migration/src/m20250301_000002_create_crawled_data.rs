use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrawledData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawledData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawledData::Link).string().not_null())
                    .col(ColumnDef::new(CrawledData::Title).string())
                    .col(ColumnDef::new(CrawledData::Content).text())
                    .col(ColumnDef::new(CrawledData::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(CrawledData::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Cascade deletes scan by link prefix
        manager
            .create_index(
                Index::create()
                    .name("idx_crawled_data_link")
                    .table(CrawledData::Table)
                    .col(CrawledData::Link)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrawledData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CrawledData {
    Table,
    Id,
    Link,
    Title,
    Content,
    PublishedAt,
    CreatedAt,
}
