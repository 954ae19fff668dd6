//! SeaORM repository implementations

use crate::contract::{Choice, GuidedLevel, Level, Question};
use crate::domain::repository::{
    ChoicesRepository, GuidedLevelsRepository, LevelsRepository, QuestionsRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use std::sync::Arc;

use super::entity::{choice, guided_level, level, question};
use super::mapper;

// ===== Levels Repository =====

pub struct SeaOrmLevelsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmLevelsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LevelsRepository for SeaOrmLevelsRepository {
    async fn create(&self, level: &Level) -> Result<Level> {
        let result = level::Entity::insert(mapper::new_level(level))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Level>> {
        let result = level::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn find_by_difficulty(&self, difficulty: i32) -> Result<Option<Level>> {
        let result = level::Entity::find()
            .filter(level::Column::Difficulty.eq(difficulty))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Level>> {
        let results = level::Entity::find()
            .order_by_asc(level::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, level: &Level) -> Result<Level> {
        let active: level::ActiveModel = level.into();
        let result = level::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = level::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Guided Levels Repository =====

pub struct SeaOrmGuidedLevelsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmGuidedLevelsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GuidedLevelsRepository for SeaOrmGuidedLevelsRepository {
    async fn create(&self, guided: &GuidedLevel) -> Result<GuidedLevel> {
        let txn = self.db.begin().await?;

        let parent = level::Entity::insert(mapper::new_level(&guided.level))
            .exec_with_returning(&txn)
            .await?;

        let mut child: guided_level::ActiveModel = guided.into();
        child.levels_ptr_id = sea_orm::ActiveValue::Set(parent.id);
        let child = guided_level::Entity::insert(child)
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;

        GuidedLevel::try_from((child, Some(parent)))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<GuidedLevel>> {
        let result = guided_level::Entity::find_by_id(id)
            .find_also_related(level::Entity)
            .one(&*self.db)
            .await?;

        result.map(GuidedLevel::try_from).transpose()
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<GuidedLevel>> {
        let results = guided_level::Entity::find()
            .find_also_related(level::Entity)
            .order_by_asc(guided_level::Column::LevelsPtrId)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(GuidedLevel::try_from)
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, guided: &GuidedLevel) -> Result<GuidedLevel> {
        let txn = self.db.begin().await?;

        let parent: level::ActiveModel = (&guided.level).into();
        let parent = level::Entity::update(parent).exec(&txn).await?;

        let child: guided_level::ActiveModel = guided.into();
        let child = guided_level::Entity::update(child).exec(&txn).await?;

        txn.commit().await?;

        GuidedLevel::try_from((child, Some(parent)))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;

        let result = guided_level::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        level::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(true)
    }
}

// ===== Questions Repository =====

pub struct SeaOrmQuestionsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmQuestionsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionsRepository for SeaOrmQuestionsRepository {
    async fn create(&self, question: &Question) -> Result<Question> {
        let result = question::Entity::insert(mapper::new_question(question))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>> {
        let result = question::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Question>> {
        let results = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, question: &Question) -> Result<Question> {
        let active: question::ActiveModel = question.into();
        let result = question::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = question::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Choices Repository =====

pub struct SeaOrmChoicesRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmChoicesRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChoicesRepository for SeaOrmChoicesRepository {
    async fn create(&self, choice: &Choice) -> Result<Choice> {
        let result = choice::Entity::insert(mapper::new_choice(choice))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Choice>> {
        let result = choice::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(
        &self,
        question_id: Option<i32>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Choice>> {
        let mut query = choice::Entity::find();

        if let Some(qid) = question_id {
            query = query.filter(choice::Column::QuestionId.eq(qid));
        }

        let results = query
            .order_by_asc(choice::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, choice: &Choice) -> Result<Choice> {
        let active: choice::ActiveModel = choice.into();
        let result = choice::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = choice::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
