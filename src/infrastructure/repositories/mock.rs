use crate::domain::teachers::{NewTeacher, Teacher, TeacherRepository};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Records {
    teachers: Vec<Teacher>,
    last_id: i32,
}

/// In-memory teacher store. Mirrors the database schema: ids come from a
/// sequence and `vat` is unique.
#[derive(Clone, Default)]
pub struct MockTeacherRepository {
    records: Arc<Mutex<Records>>,
}

impl MockTeacherRepository {
    /// Seeds the store with existing records, including ones that are incomplete.
    pub fn with_teachers(teachers: Vec<Teacher>) -> Self {
        let last_id = teachers.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            records: Arc::new(Mutex::new(Records { teachers, last_id })),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|r| r.teachers.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>, anyhow::Error> {
        self.records
            .lock()
            .map_err(|_| anyhow!("teacher store lock poisoned"))
    }
}

fn vat_taken(records: &Records, vat: &str, except_id: Option<i32>) -> bool {
    records
        .teachers
        .iter()
        .any(|t| t.vat == vat && Some(t.id) != except_id)
}

#[async_trait]
impl TeacherRepository for MockTeacherRepository {
    async fn get_by_vat(&self, vat: &str) -> Result<Option<Teacher>, anyhow::Error> {
        let records = self.lock()?;
        Ok(records.teachers.iter().find(|t| t.vat == vat).cloned())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, anyhow::Error> {
        let records = self.lock()?;
        Ok(records.teachers.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, teacher: NewTeacher) -> Result<Teacher, anyhow::Error> {
        let mut records = self.lock()?;
        if vat_taken(&records, &teacher.vat, None) {
            return Err(anyhow!("duplicate vat {}", teacher.vat));
        }

        records.last_id += 1;
        let inserted = Teacher {
            id: records.last_id,
            vat: teacher.vat,
            firstname: Some(teacher.firstname),
            lastname: Some(teacher.lastname),
        };
        records.teachers.push(inserted.clone());
        Ok(inserted)
    }

    async fn update(&self, teacher: Teacher) -> Result<Teacher, anyhow::Error> {
        let mut records = self.lock()?;
        if vat_taken(&records, &teacher.vat, Some(teacher.id)) {
            return Err(anyhow!("duplicate vat {}", teacher.vat));
        }

        let existing = records
            .teachers
            .iter_mut()
            .find(|t| t.id == teacher.id)
            .ok_or_else(|| anyhow!("no teacher with id {}", teacher.id))?;
        *existing = teacher.clone();
        Ok(teacher)
    }

    async fn delete(&self, id: i32) -> Result<(), anyhow::Error> {
        self.lock()?.teachers.retain(|t| t.id != id);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Teacher>, anyhow::Error> {
        Ok(self.lock()?.teachers.clone())
    }

    async fn get_by_lastname(&self, lastname: &str) -> Result<Vec<Teacher>, anyhow::Error> {
        let records = self.lock()?;
        Ok(records
            .teachers
            .iter()
            .filter(|t| t.lastname.as_deref() == Some(lastname))
            .cloned()
            .collect())
    }
}
