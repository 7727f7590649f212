use sea_orm_migration::prelude::*;

use crate::join_table::{ordered_join_table, position_index};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create blogs table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Blogs::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Blogs::Position).integer().not_null())
                    .col(ColumnDef::new(Blogs::Title).text().not_null())
                    .col(ColumnDef::new(Blogs::Link).text().not_null())
                    .col(ColumnDef::new(Blogs::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blogs_portfolio_id")
                            .from(Blogs::Table, Blogs::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(position_index("blogs", "portfolio_id"))
            .await?;

        manager
            .create_table(ordered_join_table(
                "blog_tech_stacks",
                "blogs",
                "blog_id",
                "tech_stacks",
                "tech_stack_id",
            ))
            .await?;
        manager
            .create_index(position_index("blog_tech_stacks", "blog_id"))
            .await?;

        // =====================================================
        // Create skills table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Skills::Position).integer().not_null())
                    .col(ColumnDef::new(Skills::Title).text().not_null())
                    .col(ColumnDef::new(Skills::Type).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_portfolio_id")
                            .from(Skills::Table, Skills::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(position_index("skills", "portfolio_id"))
            .await?;

        // =====================================================
        // Create tools table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Tools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tools::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Tools::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Tools::Position).integer().not_null())
                    .col(ColumnDef::new(Tools::Title).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tools_portfolio_id")
                            .from(Tools::Table, Tools::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(position_index("tools", "portfolio_id"))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["tools", "skills", "blog_tech_stacks", "blogs"] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    PortfolioId,
    Position,
    Title,
    Link,
    Description,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    PortfolioId,
    Position,
    Title,
    Type,
}

#[derive(DeriveIden)]
enum Tools {
    Table,
    Id,
    PortfolioId,
    Position,
    Title,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}
