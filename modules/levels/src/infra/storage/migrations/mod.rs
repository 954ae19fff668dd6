//! Database migrations for the levels module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20170811_000001_create_levels::Migration),
            Box::new(m20170905_000002_create_guided_levels::Migration),
            Box::new(m20170905_000003_create_questions::Migration),
            Box::new(m20170905_000004_create_choices::Migration),
        ]
    }

    // Own history table so the retail module can share the database
    fn migration_table_name() -> DynIden {
        Alias::new("levels_migrations").into_iden()
    }
}

#[derive(DeriveIden)]
enum Levels {
    Table,
    Id,
    Circuit,
    CreationDate,
    Difficulty,
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    Question,
    CreationDate,
}

mod m20170811_000001_create_levels {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170811_000001_create_levels"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Levels::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Levels::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Levels::Circuit).string_len(10_000).not_null())
                        .col(ColumnDef::new(Levels::CreationDate).date().not_null())
                        .col(
                            ColumnDef::new(Levels::Difficulty)
                                .integer()
                                .not_null()
                                .default(1)
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Levels::Table).to_owned())
                .await
        }
    }
}

mod m20170905_000002_create_guided_levels {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170905_000002_create_guided_levels"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GuidedLevels::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GuidedLevels::LevelsPtrId)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(GuidedLevels::Parts).string_len(5_000).not_null())
                        .col(ColumnDef::new(GuidedLevels::Labels).string_len(1_000).not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_guided_levels_levels_ptr")
                                .from(GuidedLevels::Table, GuidedLevels::LevelsPtrId)
                                .to(Levels::Table, Levels::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(GuidedLevels::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum GuidedLevels {
        Table,
        LevelsPtrId,
        Parts,
        Labels,
    }
}

mod m20170905_000003_create_questions {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170905_000003_create_questions"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Questions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Questions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Questions::Question).string_len(1_000).not_null())
                        .col(ColumnDef::new(Questions::CreationDate).date().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Questions::Table).to_owned())
                .await
        }
    }
}

mod m20170905_000004_create_choices {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20170905_000004_create_choices"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Choices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Choices::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Choices::Answer).string_len(100).not_null())
                        .col(ColumnDef::new(Choices::QuestionId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_choices_question")
                                .from(Choices::Table, Choices::QuestionId)
                                .to(Questions::Table, Questions::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_choices_question_id")
                        .table(Choices::Table)
                        .col(Choices::QuestionId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Choices::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Choices {
        Table,
        Id,
        Answer,
        QuestionId,
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
