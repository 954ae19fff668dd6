//! OpenAPI document for the levels REST API

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_levels,
        handlers::get_level,
        handlers::create_level,
        handlers::update_level,
        handlers::patch_level,
        handlers::delete_level,
        handlers::list_guided_levels,
        handlers::get_guided_level,
        handlers::create_guided_level,
        handlers::update_guided_level,
        handlers::patch_guided_level,
        handlers::delete_guided_level,
        handlers::list_questions,
        handlers::get_question,
        handlers::create_question,
        handlers::update_question,
        handlers::patch_question,
        handlers::delete_question,
        handlers::list_choices,
        handlers::get_choice,
        handlers::create_choice,
        handlers::update_choice,
        handlers::patch_choice,
        handlers::delete_choice,
    ),
    components(schemas(
        LevelDto,
        LevelRequest,
        LevelPatchRequest,
        GuidedLevelDto,
        GuidedLevelRequest,
        GuidedLevelPatchRequest,
        QuestionDto,
        QuestionRequest,
        QuestionPatchRequest,
        ChoiceDto,
        ChoiceRequest,
        ChoicePatchRequest,
        Problem,
    )),
    tags(
        (name = "levels", description = "Circuit levels and guided levels"),
        (name = "questions", description = "Quiz questions and answer choices")
    )
)]
pub struct LevelsApiDoc;
