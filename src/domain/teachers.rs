use async_trait::async_trait;

/// Teacher record as held by the store.
///
/// `firstname` and `lastname` are optional because rows written by older
/// tooling may lack them. Such records are kept in the store but cannot be
/// turned into a read-only view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i32,
    pub vat: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub vat: String,
    pub firstname: String,
    pub lastname: String,
}

/// Persistence primitives over teacher records.
///
/// Every method fails with the store's own error; callers treat any such error
/// as a store failure and never retry.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn get_by_vat(&self, vat: &str) -> Result<Option<Teacher>, anyhow::Error>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, anyhow::Error>;
    async fn insert(&self, teacher: NewTeacher) -> Result<Teacher, anyhow::Error>;
    /// Replaces every mutable field of the record identified by `teacher.id`.
    async fn update(&self, teacher: Teacher) -> Result<Teacher, anyhow::Error>;
    async fn delete(&self, id: i32) -> Result<(), anyhow::Error>;
    async fn get_all(&self) -> Result<Vec<Teacher>, anyhow::Error>;
    async fn get_by_lastname(&self, lastname: &str) -> Result<Vec<Teacher>, anyhow::Error>;
}
