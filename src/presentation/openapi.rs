use crate::application::teachers::{TeacherInsertDto, TeacherUpdateDto};
use crate::presentation::handlers::teachers::TeacherResource;
use crate::shared::error::{ErrorResponse, JsonApiError};
use crate::shared::response::{JsonApiLinks, JsonApiMeta, JsonApiResource, JsonApiResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School App Teacher API",
        version = "0.1.0",
        description = "Teacher administration for the school application.\n\nResponses follow the JSON:API v1.1 document structure."
    ),
    paths(
        crate::presentation::handlers::teachers::create_teacher,
        crate::presentation::handlers::teachers::get_teacher,
        crate::presentation::handlers::teachers::list_teachers,
        crate::presentation::handlers::teachers::update_teacher,
        crate::presentation::handlers::teachers::delete_teacher,
    ),
    components(
        schemas(
            TeacherInsertDto,
            TeacherUpdateDto,
            TeacherResource,
            JsonApiResource<TeacherResource>,
            JsonApiResponse<JsonApiResource<TeacherResource>>,
            JsonApiResponse<Vec<JsonApiResource<TeacherResource>>>,
            JsonApiResponse<serde_json::Value>,
            JsonApiMeta,
            JsonApiLinks,
            ErrorResponse,
            JsonApiError,
        )
    ),
    tags(
        (name = "teachers", description = "Teacher management endpoints")
    )
)]
pub struct ApiDoc;
