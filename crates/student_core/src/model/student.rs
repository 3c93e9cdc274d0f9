//! Student record model.
//!
//! # Invariants
//! - `student_id` is unique across stored records (enforced by storage).
//! - `name` and `department` carry no uniqueness constraint.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-assigned primary key. Never generated by storage.
pub type StudentId = i64;

/// One row of the `students` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub name: String,
    pub department: String,
    /// The only attribute mutable after creation.
    pub marks: f64,
}

impl Student {
    pub fn new(
        student_id: StudentId,
        name: impl Into<String>,
        department: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            student_id,
            name: name.into(),
            department: department.into(),
            marks,
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // `{:?}` keeps the fractional part for whole values (`91.0`, not `91`).
        write!(
            f,
            "StudentID: {}, Name: {}, Department: {}, Marks: {:?}",
            self.student_id, self.name, self.department, self.marks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Student;

    #[test]
    fn display_keeps_fractional_marks() {
        let student = Student::new(101, "Asha", "CS", 91.0);
        assert_eq!(
            student.to_string(),
            "StudentID: 101, Name: Asha, Department: CS, Marks: 91.0"
        );
    }

    #[test]
    fn display_shows_non_whole_marks_as_is() {
        let student = Student::new(7, "Ravi", "EE", 88.5);
        assert!(student.to_string().ends_with("Marks: 88.5"));
    }
}
