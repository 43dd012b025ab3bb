use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Identifier of a student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

/// Identifier of a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_newtype!(StudentId);
impl_string_newtype!(CourseId);

/// Many-to-many registry of students and courses.
///
/// Both directions of the relation are held as materialized maps; a lookup
/// in either direction is a single probe. Invariant: the two maps mirror
/// each other exactly; `enroll` is the only mutation and always writes both
/// sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentRegistry {
    courses_by_student: HashMap<StudentId, HashSet<CourseId>>,
    students_by_course: HashMap<CourseId, HashSet<StudentId>>,
}

impl EnrollmentRegistry {
    /// Empty registry with no students and no courses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `student` is enrolled in `course`.
    ///
    /// A first mention of either id materializes its entry; re-enrolling an
    /// existing pair changes nothing. Never fails.
    pub fn enroll(&mut self, student: StudentId, course: CourseId) {
        let courses = self.courses_by_student.entry(student.clone()).or_default();
        let students = self.students_by_course.entry(course.clone()).or_default();
        courses.insert(course);
        students.insert(student);
    }

    /// Courses the student is enrolled in, in unspecified order.
    ///
    /// An unknown student is simply enrolled in nothing: empty, not an error.
    pub fn courses_of(&self, student: &StudentId) -> Vec<CourseId> {
        self.courses_by_student
            .get(student)
            .map(|courses| courses.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Students enrolled in the course, in unspecified order.
    ///
    /// An unknown course simply has nobody enrolled: empty, not an error.
    pub fn students_of(&self, course: &CourseId) -> Vec<StudentId> {
        self.students_by_course
            .get(course)
            .map(|students| students.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Membership probe, a direct hash lookup on the student side.
    pub fn is_enrolled(&self, student: &StudentId, course: &CourseId) -> bool {
        self.courses_by_student
            .get(student)
            .is_some_and(|courses| courses.contains(course))
    }
}
