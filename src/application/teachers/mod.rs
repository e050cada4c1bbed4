pub mod dtos;
pub mod mapper;
pub mod service;

pub use dtos::{TeacherInsertDto, TeacherReadOnlyDto, TeacherUpdateDto};
pub use mapper::{DtoTeacherMapper, TeacherMapper};
pub use service::TeacherService;
