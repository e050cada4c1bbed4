use crate::application::teachers::{TeacherInsertDto, TeacherReadOnlyDto, TeacherUpdateDto};
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use crate::shared::response::{JsonApiLinks, JsonApiMeta, JsonApiResource, JsonApiResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

const RESOURCE_TYPE: &str = "teachers";

#[derive(Serialize, ToSchema)]
pub struct TeacherResource {
    #[schema(example = "123456789")]
    pub vat: String,
    #[schema(example = "Maria")]
    pub firstname: String,
    #[schema(example = "Papadopoulou")]
    pub lastname: String,
}

impl TeacherResource {
    pub fn resource(dto: TeacherReadOnlyDto) -> JsonApiResource<TeacherResource> {
        JsonApiResource::new(
            RESOURCE_TYPE,
            dto.id.to_string(),
            TeacherResource {
                vat: dto.vat,
                firstname: dto.firstname,
                lastname: dto.lastname,
            },
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTeachersQuery {
    #[serde(default)]
    pub filter: TeacherFilter,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeacherFilter {
    pub lastname: Option<String>,
}

/// Create a new teacher
#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    request_body = TeacherInsertDto,
    responses(
        (status = 201, description = "Teacher created successfully", body = JsonApiResponse<JsonApiResource<TeacherResource>>),
        (status = 409, description = "A teacher with this VAT already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<TeacherInsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = state.teacher_service().insert_teacher(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(JsonApiResponse::new(TeacherResource::resource(teacher))),
    ))
}

/// Get a teacher by ID
#[utoipa::path(
    get,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher found", body = JsonApiResponse<JsonApiResource<TeacherResource>>),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = state.teacher_service().get_teacher_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(TeacherResource::resource(teacher))),
    ))
}

/// List teachers, optionally filtered by lastname
#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    params(
        ("filter[lastname]" = Option<String>, Query, description = "Only return teachers with this exact lastname")
    ),
    responses(
        (status = 200, description = "List of teachers", body = JsonApiResponse<Vec<JsonApiResource<TeacherResource>>>),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Qs(query): Qs<ListTeachersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = state.teacher_service();
    let teachers = match query.filter.lastname.as_deref() {
        Some(lastname) => service.get_teachers_by_lastname(lastname).await?,
        None => service.get_all_teachers().await?,
    };

    let total = teachers.len() as i64;
    let resources: Vec<JsonApiResource<TeacherResource>> =
        teachers.into_iter().map(TeacherResource::resource).collect();

    let self_link = match uri.query() {
        Some(q) => format!("{}?{}", uri.path(), q),
        None => uri.path().to_string(),
    };

    Ok((
        StatusCode::OK,
        Json(
            JsonApiResponse::new(resources)
                .with_meta(JsonApiMeta::new().with_total(total))
                .with_links(JsonApiLinks::new().with_self(self_link)),
        ),
    ))
}

/// Replace a teacher's fields
#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = TeacherUpdateDto,
    responses(
        (status = 200, description = "Teacher updated successfully", body = JsonApiResponse<JsonApiResource<TeacherResource>>),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 409, description = "Another teacher already has this VAT", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<TeacherUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = state.teacher_service().update_teacher(id, req).await?;

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(TeacherResource::resource(teacher))),
    ))
}

/// Delete a teacher
#[utoipa::path(
    delete,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher deleted successfully", body = JsonApiResponse<serde_json::Value>),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.teacher_service().delete_teacher(id).await?;

    let meta = JsonApiMeta::new().with_extra(json!({ "deleted": true }));
    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(json!(null)).with_meta(meta)),
    ))
}
