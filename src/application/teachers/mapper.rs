use super::dtos::{TeacherInsertDto, TeacherReadOnlyDto, TeacherUpdateDto};
use crate::domain::teachers::{NewTeacher, Teacher};

/// Conversions between teacher transfer objects and the domain model.
pub trait TeacherMapper: Send + Sync {
    fn insert_to_model(&self, dto: &TeacherInsertDto) -> NewTeacher;
    fn update_to_model(&self, dto: &TeacherUpdateDto) -> Teacher;
    /// `None` when the record lacks a field the read-only view requires.
    fn to_read_only(&self, teacher: &Teacher) -> Option<TeacherReadOnlyDto>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DtoTeacherMapper;

impl TeacherMapper for DtoTeacherMapper {
    fn insert_to_model(&self, dto: &TeacherInsertDto) -> NewTeacher {
        NewTeacher {
            vat: dto.vat.clone(),
            firstname: dto.firstname.clone(),
            lastname: dto.lastname.clone(),
        }
    }

    fn update_to_model(&self, dto: &TeacherUpdateDto) -> Teacher {
        Teacher {
            id: dto.id,
            vat: dto.vat.clone(),
            firstname: Some(dto.firstname.clone()),
            lastname: Some(dto.lastname.clone()),
        }
    }

    fn to_read_only(&self, teacher: &Teacher) -> Option<TeacherReadOnlyDto> {
        if teacher.vat.trim().is_empty() {
            return None;
        }

        Some(TeacherReadOnlyDto {
            id: teacher.id,
            vat: teacher.vat.clone(),
            firstname: non_blank(teacher.firstname.as_deref())?,
            lastname: non_blank(teacher.lastname.as_deref())?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
