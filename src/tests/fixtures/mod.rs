// Shared builders for tests. Compiled only under cfg(test).

pub mod coaches;
pub mod courses;
pub mod enrollments;
pub mod meetings;
pub mod payments;
pub mod students;
