use sea_orm_migration::prelude::*;

use crate::join_table::{ordered_join_table, position_index};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create contacts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Contacts::Name).text().not_null())
                    .col(ColumnDef::new(Contacts::Icon).text().not_null())
                    .col(ColumnDef::new(Contacts::Link).text().not_null())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Join tables: profile → contacts, portfolio → contacts
        // =====================================================
        manager
            .create_table(ordered_join_table(
                "profile_contacts",
                "profiles",
                "profile_id",
                "contacts",
                "contact_id",
            ))
            .await?;
        manager
            .create_index(position_index("profile_contacts", "profile_id"))
            .await?;

        manager
            .create_table(ordered_join_table(
                "portfolio_contacts",
                "portfolios",
                "portfolio_id",
                "contacts",
                "contact_id",
            ))
            .await?;
        manager
            .create_index(position_index("portfolio_contacts", "portfolio_id"))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["portfolio_contacts", "profile_contacts"] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Icon,
    Link,
}
