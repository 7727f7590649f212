use sea_orm_migration::prelude::*;

use crate::join_table::{ordered_join_table, position_index};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Experiences::Position).integer().not_null())
                    .col(ColumnDef::new(Experiences::CompanyName).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::CompanyDescription)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).text().not_null())
                    // NULL means the position is ongoing
                    .col(ColumnDef::new(Experiences::EndDate).text().null())
                    .col(ColumnDef::new(Experiences::Role).text().not_null())
                    .col(ColumnDef::new(Experiences::JobType).text().not_null())
                    // FK → portfolios
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiences_portfolio_id")
                            .from(Experiences::Table, Experiences::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(position_index("experiences", "portfolio_id"))
            .await?;

        // =====================================================
        // Join table: experience → contacts
        // =====================================================
        manager
            .create_table(ordered_join_table(
                "experience_contacts",
                "experiences",
                "experience_id",
                "contacts",
                "contact_id",
            ))
            .await?;
        manager
            .create_index(position_index("experience_contacts", "experience_id"))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("experience_contacts"))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    PortfolioId,
    Position,
    CompanyName,
    CompanyDescription,
    StartDate,
    EndDate,
    Role,
    JobType,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}
