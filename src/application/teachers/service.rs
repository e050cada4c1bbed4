use super::dtos::{TeacherInsertDto, TeacherReadOnlyDto, TeacherUpdateDto};
use super::mapper::{DtoTeacherMapper, TeacherMapper};
use crate::domain::teachers::{Teacher, TeacherRepository};
use crate::shared::error::AppError;
use anyhow::anyhow;
use std::sync::Arc;
use validator::Validate;

/// Teacher CRUD on top of a [`TeacherRepository`].
///
/// Holds no state of its own: every call re-reads from the store. The vat
/// uniqueness check and the following write are separate store calls, so the
/// store must also reject duplicates to be safe under concurrent writers.
pub struct TeacherService {
    repo: Arc<dyn TeacherRepository>,
    mapper: Arc<dyn TeacherMapper>,
}

fn store_failure(operation: &'static str) -> impl FnOnce(anyhow::Error) -> AppError {
    move |e| {
        tracing::error!(operation, error = ?e, "teacher store call failed");
        AppError::StoreFailure(e)
    }
}

fn invalid(e: validator::ValidationErrors) -> AppError {
    tracing::warn!(error = %e, "teacher input rejected");
    AppError::ValidationError(e.to_string())
}

fn not_found(id: i32) -> AppError {
    tracing::warn!(id, "teacher not found");
    AppError::NotFound(format!("Teacher with id {} was not found", id))
}

impl TeacherService {
    pub fn new(repo: Arc<dyn TeacherRepository>) -> Self {
        Self::with_mapper(repo, Arc::new(DtoTeacherMapper))
    }

    pub fn with_mapper(repo: Arc<dyn TeacherRepository>, mapper: Arc<dyn TeacherMapper>) -> Self {
        Self { repo, mapper }
    }

    #[tracing::instrument(skip(self, dto), fields(vat = %dto.vat))]
    pub async fn insert_teacher(
        &self,
        dto: TeacherInsertDto,
    ) -> Result<TeacherReadOnlyDto, AppError> {
        dto.validate().map_err(invalid)?;
        let teacher = self.mapper.insert_to_model(&dto);

        if self
            .repo
            .get_by_vat(&dto.vat)
            .await
            .map_err(store_failure("get_by_vat"))?
            .is_some()
        {
            tracing::warn!("teacher vat already in use");
            return Err(AppError::AlreadyExists(format!(
                "Teacher with vat {} already exists",
                dto.vat
            )));
        }

        let inserted = self
            .repo
            .insert(teacher)
            .await
            .map_err(store_failure("insert"))?;
        tracing::info!(id = inserted.id, "teacher inserted");

        self.mapper.to_read_only(&inserted).ok_or_else(|| {
            store_failure("insert")(anyhow!(
                "inserted teacher {} is missing required fields",
                inserted.id
            ))
        })
    }

    /// Replaces the fields of teacher `id` with those in `dto`.
    ///
    /// `dto.id` must equal `id` and the fields must pass validation; otherwise the
    /// call fails before the store is touched.
    #[tracing::instrument(skip(self, dto), fields(vat = %dto.vat))]
    pub async fn update_teacher(
        &self,
        id: i32,
        dto: TeacherUpdateDto,
    ) -> Result<TeacherReadOnlyDto, AppError> {
        if dto.id != id {
            tracing::warn!(body_id = dto.id, "teacher id mismatch");
            return Err(AppError::ValidationError(format!(
                "Teacher id {} in body does not match id {}",
                dto.id, id
            )));
        }
        dto.validate().map_err(invalid)?;

        self.repo
            .get_by_id(id)
            .await
            .map_err(store_failure("get_by_id"))?
            .ok_or_else(|| not_found(id))?;

        if let Some(holder) = self
            .repo
            .get_by_vat(&dto.vat)
            .await
            .map_err(store_failure("get_by_vat"))?
            && holder.id != dto.id
        {
            tracing::warn!(holder_id = holder.id, "teacher vat already in use");
            return Err(AppError::AlreadyExists(format!(
                "Teacher with vat {} already exists",
                dto.vat
            )));
        }

        let teacher = self.mapper.update_to_model(&dto);
        let updated = self
            .repo
            .update(teacher)
            .await
            .map_err(store_failure("update"))?;
        tracing::info!("teacher updated");

        self.mapper.to_read_only(&updated).ok_or_else(|| {
            store_failure("update")(anyhow!(
                "updated teacher {} is missing required fields",
                updated.id
            ))
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_teacher(&self, id: i32) -> Result<(), AppError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(store_failure("get_by_id"))?
            .ok_or_else(|| not_found(id))?;

        self.repo
            .delete(id)
            .await
            .map_err(store_failure("delete"))?;
        tracing::info!("teacher deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_teacher_by_id(&self, id: i32) -> Result<TeacherReadOnlyDto, AppError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(store_failure("get_by_id"))?
            .and_then(|teacher| self.mapper.to_read_only(&teacher))
            .ok_or_else(|| not_found(id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_teachers(&self) -> Result<Vec<TeacherReadOnlyDto>, AppError> {
        let teachers = self
            .repo
            .get_all()
            .await
            .map_err(store_failure("get_all"))?;
        Ok(self.map_all(teachers))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_teachers_by_lastname(
        &self,
        lastname: &str,
    ) -> Result<Vec<TeacherReadOnlyDto>, AppError> {
        let teachers = self
            .repo
            .get_by_lastname(lastname)
            .await
            .map_err(store_failure("get_by_lastname"))?;
        Ok(self.map_all(teachers))
    }

    /// Maps every record that can be mapped; the rest are logged and left out.
    fn map_all(&self, teachers: Vec<Teacher>) -> Vec<TeacherReadOnlyDto> {
        let mut skipped = Vec::new();
        let mapped: Vec<TeacherReadOnlyDto> = teachers
            .iter()
            .filter_map(|teacher| {
                let dto = self.mapper.to_read_only(teacher);
                if dto.is_none() {
                    skipped.push(teacher.id);
                }
                dto
            })
            .collect();

        if !skipped.is_empty() {
            tracing::warn!(
                skipped = skipped.len(),
                ids = ?skipped,
                "skipped teacher records with missing fields"
            );
        }

        mapped
    }
}
