use crate::domain::teachers::Teacher;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TeacherDbModel {
    pub id: i32,
    pub vat: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl From<TeacherDbModel> for Teacher {
    fn from(model: TeacherDbModel) -> Self {
        Self {
            id: model.id,
            vat: model.vat,
            firstname: model.firstname,
            lastname: model.lastname,
        }
    }
}
