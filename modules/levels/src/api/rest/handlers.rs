//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::*;
use super::error::{
    map_domain_error, map_json_rejection, map_path_rejection, map_query_rejection, Problem,
};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

type Svc = Extension<Arc<Service>>;

// ===== Level Handlers =====

/// List levels, guided levels' parents included
#[utoipa::path(
    get,
    path = "/level",
    tag = "levels",
    params(ListQuery),
    responses((status = 200, description = "Levels ordered by id", body = [LevelDto]))
)]
pub async fn list_levels(
    Extension(service): Svc,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<LevelDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let levels = service
        .list_levels((&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(levels.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Level id")),
    responses(
        (status = 200, description = "Success", body = LevelDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<LevelDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let level = service.get_level(id).await.map_err(map_domain_error)?;
    Ok(Json(level.into()))
}

#[utoipa::path(
    post,
    path = "/level",
    tag = "levels",
    request_body = LevelRequest,
    responses(
        (status = 201, description = "Created", body = LevelDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 409, description = "Difficulty already taken", body = Problem)
    )
)]
pub async fn create_level(
    Extension(service): Svc,
    payload: Result<Json<LevelRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LevelDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let level = service
        .create_level(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(level.into())))
}

#[utoipa::path(
    put,
    path = "/level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Level id")),
    request_body = LevelRequest,
    responses(
        (status = 200, description = "Success", body = LevelDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem),
        (status = 409, description = "Conflict", body = Problem)
    )
)]
pub async fn update_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<LevelRequest>, JsonRejection>,
) -> Result<Json<LevelDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let level = service
        .update_level(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(level.into()))
}

#[utoipa::path(
    patch,
    path = "/level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Level id")),
    request_body = LevelPatchRequest,
    responses(
        (status = 200, description = "Success", body = LevelDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem),
        (status = 409, description = "Conflict", body = Problem)
    )
)]
pub async fn patch_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<LevelPatchRequest>, JsonRejection>,
) -> Result<Json<LevelDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let level = service
        .patch_level(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(level.into()))
}

#[utoipa::path(
    delete,
    path = "/level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Level id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service.delete_level(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Guided Level Handlers =====

#[utoipa::path(
    get,
    path = "/guided-level",
    tag = "levels",
    params(ListQuery),
    responses((status = 200, description = "Success", body = [GuidedLevelDto]))
)]
pub async fn list_guided_levels(
    Extension(service): Svc,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<GuidedLevelDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let guided = service
        .list_guided_levels((&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(guided.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/guided-level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Guided level id")),
    responses(
        (status = 200, description = "Success", body = GuidedLevelDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_guided_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<GuidedLevelDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let guided = service
        .get_guided_level(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(guided.into()))
}

#[utoipa::path(
    post,
    path = "/guided-level",
    tag = "levels",
    request_body = GuidedLevelRequest,
    responses(
        (status = 201, description = "Created", body = GuidedLevelDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 409, description = "Conflict", body = Problem)
    )
)]
pub async fn create_guided_level(
    Extension(service): Svc,
    payload: Result<Json<GuidedLevelRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GuidedLevelDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let guided = service
        .create_guided_level(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(guided.into())))
}

#[utoipa::path(
    put,
    path = "/guided-level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Guided level id")),
    request_body = GuidedLevelRequest,
    responses(
        (status = 200, description = "Success", body = GuidedLevelDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem),
        (status = 409, description = "Conflict", body = Problem)
    )
)]
pub async fn update_guided_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<GuidedLevelRequest>, JsonRejection>,
) -> Result<Json<GuidedLevelDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let guided = service
        .update_guided_level(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(guided.into()))
}

#[utoipa::path(
    patch,
    path = "/guided-level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Guided level id")),
    request_body = GuidedLevelPatchRequest,
    responses(
        (status = 200, description = "Success", body = GuidedLevelDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem),
        (status = 409, description = "Conflict", body = Problem)
    )
)]
pub async fn patch_guided_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<GuidedLevelPatchRequest>, JsonRejection>,
) -> Result<Json<GuidedLevelDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let guided = service
        .patch_guided_level(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(guided.into()))
}

/// Delete a guided level and its parent level
#[utoipa::path(
    delete,
    path = "/guided-level/{id}",
    tag = "levels",
    params(("id" = i32, Path, description = "Guided level id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_guided_level(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service
        .delete_guided_level(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Question Handlers =====

#[utoipa::path(
    get,
    path = "/question",
    tag = "questions",
    params(ListQuery),
    responses((status = 200, description = "Success", body = [QuestionDto]))
)]
pub async fn list_questions(
    Extension(service): Svc,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<QuestionDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let questions = service
        .list_questions((&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/question/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Success", body = QuestionDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_question(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<QuestionDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let question = service.get_question(id).await.map_err(map_domain_error)?;
    Ok(Json(question.into()))
}

#[utoipa::path(
    post,
    path = "/question",
    tag = "questions",
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Created", body = QuestionDto),
        (status = 400, description = "Invalid input", body = Problem)
    )
)]
pub async fn create_question(
    Extension(service): Svc,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuestionDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let question = service
        .create_question(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(question.into())))
}

#[utoipa::path(
    put,
    path = "/question/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Question id")),
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Success", body = QuestionDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn update_question(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let question = service
        .update_question(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(question.into()))
}

#[utoipa::path(
    patch,
    path = "/question/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Question id")),
    request_body = QuestionPatchRequest,
    responses(
        (status = 200, description = "Success", body = QuestionDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn patch_question(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<QuestionPatchRequest>, JsonRejection>,
) -> Result<Json<QuestionDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let question = service
        .patch_question(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(question.into()))
}

/// Delete a question and all of its choices
#[utoipa::path(
    delete,
    path = "/question/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_question(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service.delete_question(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Choice Handlers =====

#[utoipa::path(
    get,
    path = "/choice",
    tag = "questions",
    params(ChoiceListQuery),
    responses((status = 200, description = "Success", body = [ChoiceDto]))
)]
pub async fn list_choices(
    Extension(service): Svc,
    query: Result<Query<ChoiceListQuery>, QueryRejection>,
) -> Result<Json<Vec<ChoiceDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let choices = service
        .list_choices(query.question, (&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(choices.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/choice/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Choice id")),
    responses(
        (status = 200, description = "Success", body = ChoiceDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_choice(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ChoiceDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let choice = service.get_choice(id).await.map_err(map_domain_error)?;
    Ok(Json(choice.into()))
}

#[utoipa::path(
    post,
    path = "/choice",
    tag = "questions",
    request_body = ChoiceRequest,
    responses(
        (status = 201, description = "Created", body = ChoiceDto),
        (status = 400, description = "Invalid input", body = Problem)
    )
)]
pub async fn create_choice(
    Extension(service): Svc,
    payload: Result<Json<ChoiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ChoiceDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let choice = service
        .create_choice(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(choice.into())))
}

#[utoipa::path(
    put,
    path = "/choice/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Choice id")),
    request_body = ChoiceRequest,
    responses(
        (status = 200, description = "Success", body = ChoiceDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn update_choice(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ChoiceRequest>, JsonRejection>,
) -> Result<Json<ChoiceDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let choice = service
        .update_choice(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(choice.into()))
}

#[utoipa::path(
    patch,
    path = "/choice/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Choice id")),
    request_body = ChoicePatchRequest,
    responses(
        (status = 200, description = "Success", body = ChoiceDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn patch_choice(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ChoicePatchRequest>, JsonRejection>,
) -> Result<Json<ChoiceDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let choice = service
        .patch_choice(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(choice.into()))
}

#[utoipa::path(
    delete,
    path = "/choice/{id}",
    tag = "questions",
    params(("id" = i32, Path, description = "Choice id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_choice(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service.delete_choice(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
