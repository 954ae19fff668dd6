//! SeaORM entities for database tables

/// Levels table entity
pub mod level {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "levels")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Serialized circuit
        pub circuit: String,

        /// Date of the last save
        pub creation_date: Date,

        #[sea_orm(unique)]
        pub difficulty: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Guided extension sharing this level's id
        #[sea_orm(has_one = "super::guided_level::Entity")]
        GuidedLevel,
    }

    impl Related<super::guided_level::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::GuidedLevel.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Guided levels table entity; the primary key doubles as the parent link
pub mod guided_level {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "guided_levels")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub levels_ptr_id: i32,

        /// Predefined parts
        pub parts: String,

        /// Labels whose values the circuit must produce
        pub labels: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::level::Entity",
            from = "Column::LevelsPtrId",
            to = "super::level::Column::Id",
            on_delete = "Cascade"
        )]
        Level,
    }

    impl Related<super::level::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Level.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Questions table entity
pub mod question {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "questions")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub question: String,
        pub creation_date: Date,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::choice::Entity")]
        Choice,
    }

    impl Related<super::choice::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Choice.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Choices table entity
pub mod choice {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "choices")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub answer: String,
        pub question_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::question::Entity",
            from = "Column::QuestionId",
            to = "super::question::Column::Id",
            on_delete = "Cascade"
        )]
        Question,
    }

    impl Related<super::question::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Question.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
