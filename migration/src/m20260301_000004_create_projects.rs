use sea_orm_migration::prelude::*;

use crate::join_table::{ordered_join_table, position_index};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Projects::Position).integer().not_null())
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Projects::Link).text().null())
                    // FK → portfolios
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_portfolio_id")
                            .from(Projects::Table, Projects::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(position_index("projects", "portfolio_id"))
            .await?;

        // =====================================================
        // Create features table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Features::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Features::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Features::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(Features::Position).integer().not_null())
                    .col(ColumnDef::new(Features::Title).text().not_null())
                    .col(
                        ColumnDef::new(Features::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    // FK → projects
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_features_project_id")
                            .from(Features::Table, Features::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(position_index("features", "project_id"))
            .await?;

        // =====================================================
        // Create tech_stacks table (shared, keyed)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TechStacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStacks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TechStacks::Key).text().not_null().unique_key())
                    .col(ColumnDef::new(TechStacks::Title).text().not_null())
                    .col(ColumnDef::new(TechStacks::Icon).text().not_null().default(""))
                    .col(ColumnDef::new(TechStacks::Level).text().not_null())
                    .col(ColumnDef::new(TechStacks::Priority).text().not_null())
                    .col(ColumnDef::new(TechStacks::Type).text().not_null())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Join table: feature → tech_stacks
        // =====================================================
        manager
            .create_table(ordered_join_table(
                "feature_tech_stacks",
                "features",
                "feature_id",
                "tech_stacks",
                "tech_stack_id",
            ))
            .await?;
        manager
            .create_index(position_index("feature_tech_stacks", "feature_id"))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("feature_tech_stacks"))
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(TechStacks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Features::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    PortfolioId,
    Position,
    Title,
    Description,
    Link,
}

#[derive(DeriveIden)]
enum Features {
    Table,
    Id,
    ProjectId,
    Position,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum TechStacks {
    Table,
    Id,
    Key,
    Title,
    Icon,
    Level,
    Priority,
    Type,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}
