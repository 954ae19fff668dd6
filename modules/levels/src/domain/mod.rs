//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{
    ChoicesRepository, GuidedLevelsRepository, LevelsRepository, QuestionsRepository,
};
pub use service::Service;
