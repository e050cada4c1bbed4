use crate::application::teachers::TeacherService;
use crate::domain::teachers::TeacherRepository;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::repositories::teachers::PostgresTeacherRepository;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub teachers: Arc<dyn TeacherRepository>,
}

impl AppState {
    /// State backed by the PostgreSQL teacher store on `pool`.
    pub fn new(pool: DbPool) -> Self {
        let teachers = Arc::new(PostgresTeacherRepository::new(pool.clone()));
        Self { pool, teachers }
    }

    pub fn with_repository(pool: DbPool, teachers: Arc<dyn TeacherRepository>) -> Self {
        Self { pool, teachers }
    }

    pub fn teacher_service(&self) -> TeacherService {
        TeacherService::new(self.teachers.clone())
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
