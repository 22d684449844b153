//! Student records use-case service.
//!
//! # Responsibility
//! - Provide the enrol / list / search / change-age flows.
//! - Fill an empty roster with the classroom sample rows on request.
//!
//! # Invariants
//! - Every repository failure is returned unchanged.
//! - A surname that matches nobody is `Ok(None)`, never an error.

use crate::model::student::Student;
use crate::model::EntityId;
use crate::repo::{RepoResult, StudentRepository};
use log::info;

const SAMPLE_STUDENTS: &[(&str, &str, i64)] = &[("John", "McCollum", 38), ("Colin", "Bell", 35)];

pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves a new student and returns it with its assigned id.
    pub fn enroll(
        &self,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        age: i64,
    ) -> RepoResult<Student> {
        let mut student = Student::new(first_name, surname, age);
        let id = self.repo.save(&mut student)?;
        info!("event=student_enroll module=service status=ok id={id}");
        Ok(student)
    }

    pub fn roster(&self) -> RepoResult<Vec<Student>> {
        self.repo.select_all()
    }

    pub fn lookup(&self, surname: &str) -> RepoResult<Option<Student>> {
        self.repo.find_by_surname(surname)
    }

    /// Finds a student by surname and sets their age.
    ///
    /// Returns the student as stored after the change, or `None` when the
    /// surname is unknown.
    pub fn change_age(&self, surname: &str, age: i64) -> RepoResult<Option<Student>> {
        let Some(mut student) = self.repo.find_by_surname(surname)? else {
            return Ok(None);
        };
        let Some(id) = student.id() else {
            return Ok(None);
        };

        self.repo.update_age(id, age)?;
        student.set_age(age);
        info!("event=student_change_age module=service status=ok id={id}");
        Ok(Some(student))
    }

    pub fn remove(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Inserts the sample students when the roster is empty.
    ///
    /// Existing rows are never touched; an already populated roster yields
    /// an empty vector.
    pub fn seed_sample(&self) -> RepoResult<Vec<Student>> {
        if !self.repo.select_all()?.is_empty() {
            info!("event=student_seed module=service status=skipped reason=roster_not_empty");
            return Ok(Vec::new());
        }

        let seeded = SAMPLE_STUDENTS
            .iter()
            .map(|&(first_name, surname, age)| self.enroll(first_name, surname, age))
            .collect::<RepoResult<Vec<_>>>()?;
        info!(
            "event=student_seed module=service status=ok count={}",
            seeded.len()
        );
        Ok(seeded)
    }
}
