use crate::domain::teachers::{NewTeacher, Teacher, TeacherRepository};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::teachers::TeacherDbModel;
use async_trait::async_trait;

#[derive(Clone)]
pub struct PostgresTeacherRepository {
    pool: DbPool,
}

impl PostgresTeacherRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    #[tracing::instrument(skip(self))]
    async fn get_by_vat(&self, vat: &str) -> Result<Option<Teacher>, anyhow::Error> {
        let teacher = sqlx::query_as::<_, TeacherDbModel>(
            r#"
            SELECT id, vat, firstname, lastname
            FROM teachers
            WHERE vat = $1
            "#,
        )
        .bind(vat)
        .fetch_optional(&self.pool)
        .await?;

        Ok(teacher.map(Teacher::from))
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, anyhow::Error> {
        let teacher = sqlx::query_as::<_, TeacherDbModel>(
            r#"
            SELECT id, vat, firstname, lastname
            FROM teachers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(teacher.map(Teacher::from))
    }

    #[tracing::instrument(skip(self, teacher))]
    async fn insert(&self, teacher: NewTeacher) -> Result<Teacher, anyhow::Error> {
        let inserted = sqlx::query_as::<_, TeacherDbModel>(
            r#"
            INSERT INTO teachers (vat, firstname, lastname)
            VALUES ($1, $2, $3)
            RETURNING id, vat, firstname, lastname
            "#,
        )
        .bind(teacher.vat)
        .bind(teacher.firstname)
        .bind(teacher.lastname)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted.into())
    }

    #[tracing::instrument(skip(self, teacher), fields(id = teacher.id))]
    async fn update(&self, teacher: Teacher) -> Result<Teacher, anyhow::Error> {
        let updated = sqlx::query_as::<_, TeacherDbModel>(
            r#"
            UPDATE teachers
            SET vat = $1, firstname = $2, lastname = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, vat, firstname, lastname
            "#,
        )
        .bind(teacher.vat)
        .bind(teacher.firstname)
        .bind(teacher.lastname)
        .bind(teacher.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated.into())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), anyhow::Error> {
        sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Teacher>, anyhow::Error> {
        let teachers = sqlx::query_as::<_, TeacherDbModel>(
            r#"
            SELECT id, vat, firstname, lastname
            FROM teachers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teachers.into_iter().map(Teacher::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_lastname(&self, lastname: &str) -> Result<Vec<Teacher>, anyhow::Error> {
        let teachers = sqlx::query_as::<_, TeacherDbModel>(
            r#"
            SELECT id, vat, firstname, lastname
            FROM teachers
            WHERE lastname = $1
            ORDER BY id
            "#,
        )
        .bind(lastname)
        .fetch_all(&self.pool)
        .await?;

        Ok(teachers.into_iter().map(Teacher::from).collect())
    }
}
