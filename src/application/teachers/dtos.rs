use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Rejects values that are empty once surrounding whitespace is removed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TeacherInsertDto {
    #[validate(
        length(min = 1, max = 20, message = "VAT must be between 1 and 20 characters"),
        custom(function = "not_blank")
    )]
    #[schema(example = "123456789", min_length = 1, max_length = 20)]
    pub vat: String,
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Firstname must be between 1 and 255 characters"
        ),
        custom(function = "not_blank")
    )]
    #[schema(example = "Maria", min_length = 1, max_length = 255)]
    pub firstname: String,
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Lastname must be between 1 and 255 characters"
        ),
        custom(function = "not_blank")
    )]
    #[schema(example = "Papadopoulou", min_length = 1, max_length = 255)]
    pub lastname: String,
}

/// Full replacement of a teacher's fields. `id` must name the record being updated.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TeacherUpdateDto {
    #[schema(example = 1)]
    pub id: i32,
    #[validate(
        length(min = 1, max = 20, message = "VAT must be between 1 and 20 characters"),
        custom(function = "not_blank")
    )]
    #[schema(example = "123456789", min_length = 1, max_length = 20)]
    pub vat: String,
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Firstname must be between 1 and 255 characters"
        ),
        custom(function = "not_blank")
    )]
    #[schema(example = "Maria", min_length = 1, max_length = 255)]
    pub firstname: String,
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Lastname must be between 1 and 255 characters"
        ),
        custom(function = "not_blank")
    )]
    #[schema(example = "Papadopoulou", min_length = 1, max_length = 255)]
    pub lastname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TeacherReadOnlyDto {
    pub id: i32,
    pub vat: String,
    pub firstname: String,
    pub lastname: String,
}
