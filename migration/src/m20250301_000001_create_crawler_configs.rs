use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrawlerConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawlerConfigs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawlerConfigs::Url).string())
                    .col(ColumnDef::new(CrawlerConfigs::Keywords).text())
                    .col(ColumnDef::new(CrawlerConfigs::LinkSelector).string())
                    .col(ColumnDef::new(CrawlerConfigs::TitleSelector).string())
                    .col(ColumnDef::new(CrawlerConfigs::DateSelector).string())
                    .col(ColumnDef::new(CrawlerConfigs::ContentSelector).string())
                    .col(ColumnDef::new(CrawlerConfigs::UrlPrefix).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrawlerConfigs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CrawlerConfigs {
    Table,
    Id,
    Url,
    Keywords,
    LinkSelector,
    TitleSelector,
    DateSelector,
    ContentSelector,
    UrlPrefix,
}
