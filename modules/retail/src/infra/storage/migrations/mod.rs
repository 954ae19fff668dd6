//! Database migrations for the retail module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20170811_000001_create_chains::Migration),
            Box::new(m20170811_000002_create_stores::Migration),
            Box::new(m20170811_000003_create_employees::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("retail_migrations").into_iden()
    }
}

#[derive(DeriveIden)]
enum Chains {
    Table,
    Id,
    Name,
    Description,
    Slogan,
    FoundedDate,
    Website,
}

#[derive(DeriveIden)]
enum Stores {
    Table,
    Id,
    ChainId,
    Number,
    Address,
    OpeningDate,
    BusinessHoursStart,
    BusinessHoursEnd,
}

mod m20170811_000001_create_chains {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170811_000001_create_chains"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Chains::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Chains::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Chains::Name).string_len(100).not_null())
                        .col(ColumnDef::new(Chains::Description).string_len(1_000).not_null())
                        .col(ColumnDef::new(Chains::Slogan).string_len(500).not_null())
                        .col(ColumnDef::new(Chains::FoundedDate).string_len(500).not_null())
                        .col(ColumnDef::new(Chains::Website).string_len(500).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Chains::Table).to_owned())
                .await
        }
    }
}

mod m20170811_000002_create_stores {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170811_000002_create_stores"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Stores::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Stores::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Stores::ChainId).integer().not_null())
                        .col(ColumnDef::new(Stores::Number).string_len(20).not_null())
                        .col(ColumnDef::new(Stores::Address).string_len(1_000).not_null())
                        .col(
                            ColumnDef::new(Stores::OpeningDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Stores::BusinessHoursStart)
                                .integer()
                                .not_null()
                                .default(8)
                                .check(Expr::col(Stores::BusinessHoursStart).between(0, 23)),
                        )
                        .col(
                            ColumnDef::new(Stores::BusinessHoursEnd)
                                .integer()
                                .not_null()
                                .default(17)
                                .check(Expr::col(Stores::BusinessHoursEnd).between(0, 23)),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stores_chain")
                                .from(Stores::Table, Stores::ChainId)
                                .to(Chains::Table, Chains::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_stores_chain_id")
                        .table(Stores::Table)
                        .col(Stores::ChainId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Stores::Table).to_owned())
                .await
        }
    }
}

mod m20170811_000003_create_employees {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170811_000003_create_employees"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employees::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Employees::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Employees::StoreId).integer().not_null())
                        .col(ColumnDef::new(Employees::Number).string_len(20).not_null())
                        .col(ColumnDef::new(Employees::FirstName).string_len(100).not_null())
                        .col(ColumnDef::new(Employees::LastName).string_len(100).not_null())
                        .col(
                            ColumnDef::new(Employees::HiredDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_employees_store")
                                .from(Employees::Table, Employees::StoreId)
                                .to(Stores::Table, Stores::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_employees_store_id")
                        .table(Employees::Table)
                        .col(Employees::StoreId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Employees::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Employees {
        Table,
        Id,
        StoreId,
        Number,
        FirstName,
        LastName,
        HiredDate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn migration_versions_are_distinct() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();
        let distinct: HashSet<&String> = names.iter().collect();

        assert_eq!(distinct.len(), names.len(), "{names:?}");
        assert!(names.iter().all(|name| name.starts_with('m')));
    }
}
