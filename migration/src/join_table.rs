use sea_orm_migration::prelude::*;

/// An ordered link table: `id`, `<parent_column>`, `<target_column>` and
/// `position`, cascading from both sides.
pub fn ordered_join_table(
    table: &str,
    parent_table: &str,
    parent_column: &str,
    target_table: &str,
    target_column: &str,
) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(
            ColumnDef::new(Alias::new("id"))
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Alias::new(parent_column)).uuid().not_null())
        .col(ColumnDef::new(Alias::new(target_column)).uuid().not_null())
        .col(ColumnDef::new(Alias::new("position")).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{table}_{parent_column}"))
                .from(Alias::new(table), Alias::new(parent_column))
                .to(Alias::new(parent_table), Alias::new("id"))
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{table}_{target_column}"))
                .from(Alias::new(table), Alias::new(target_column))
                .to(Alias::new(target_table), Alias::new("id"))
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// Index on `(parent_column, position)` for ordered child reads.
pub fn position_index(table: &str, parent_column: &str) -> IndexCreateStatement {
    Index::create()
        .name(format!("idx_{table}_{parent_column}"))
        .table(Alias::new(table))
        .col(Alias::new(parent_column))
        .col(Alias::new("position"))
        .to_owned()
}
