//! SeaORM entities for database tables

/// Chains table entity
pub mod chain {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "chains")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub description: String,
        pub slogan: String,
        pub founded_date: String,
        pub website: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::store::Entity")]
        Store,
    }

    impl Related<super::store::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Store.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Stores table entity
pub mod store {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "stores")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub chain_id: i32,
        pub number: String,
        pub address: String,
        pub opening_date: DateTimeUtc,
        pub business_hours_start: i32,
        pub business_hours_end: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::chain::Entity",
            from = "Column::ChainId",
            to = "super::chain::Column::Id",
            on_delete = "Cascade"
        )]
        Chain,
        #[sea_orm(has_many = "super::employee::Entity")]
        Employee,
    }

    impl Related<super::chain::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Chain.def()
        }
    }

    impl Related<super::employee::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Employee.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Employees table entity
pub mod employee {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "employees")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub store_id: i32,
        pub number: String,
        pub first_name: String,
        pub last_name: String,
        pub hired_date: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::store::Entity",
            from = "Column::StoreId",
            to = "super::store::Column::Id",
            on_delete = "Cascade"
        )]
        Store,
    }

    impl Related<super::store::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Store.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
