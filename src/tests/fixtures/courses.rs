// Shared test fixtures for courses.
//
// The canonical course is "Judo Juniors": Sundays and Tuesdays at 17:30,
// starting Tuesday 2025-07-01, eight sessions, ending 2025-07-29.

use chrono::NaiveDate;

use crate::modules::courses::core::course::CourseRow;
use crate::modules::courses::use_cases::create_course::command::CreateCourse;

const COURSE_ROW_JSON: &str = include_str!("json/course_row.json");

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub struct CourseRowBuilder {
    inner: CourseRow,
}

impl Default for CourseRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CourseRowBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(COURSE_ROW_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn teacher(mut self, v: impl Into<String>) -> Self {
        self.inner.teacher = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn start_date(mut self, v: &str) -> Self {
        self.inner.start_date = date(v);
        self
    }

    pub fn weekdays(mut self, v: impl Into<String>) -> Self {
        self.inner.weekdays = v.into();
        self
    }

    /// Sets the session count together with the end date it derives to.
    pub fn sessions(mut self, count: i64, end_date: &str) -> Self {
        self.inner.sessions_count = count;
        self.inner.end_date = date(end_date);
        self
    }

    pub fn color(mut self, v: impl Into<String>) -> Self {
        self.inner.color = v.into();
        self
    }

    pub fn build(self) -> CourseRow {
        self.inner
    }
}

pub struct CreateCourseBuilder {
    inner: CreateCourse,
}

impl Default for CreateCourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateCourseBuilder {
    pub fn new() -> Self {
        let row = CourseRowBuilder::new().build();
        Self {
            inner: CreateCourse {
                course_id: row.id,
                name: row.name,
                teacher: row.teacher,
                start_date: row.start_date,
                time: row.time,
                duration: Some(row.duration),
                sessions_count: row.sessions_count,
                weekdays: row.weekdays,
                color: Some(row.color),
            },
        }
    }

    pub fn course_id(mut self, v: impl Into<String>) -> Self {
        self.inner.course_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn start_date(mut self, v: &str) -> Self {
        self.inner.start_date = date(v);
        self
    }

    pub fn weekdays(mut self, v: impl Into<String>) -> Self {
        self.inner.weekdays = v.into();
        self
    }

    pub fn sessions_count(mut self, v: i64) -> Self {
        self.inner.sessions_count = v;
        self
    }

    pub fn duration(mut self, v: Option<i64>) -> Self {
        self.inner.duration = v;
        self
    }

    pub fn color(mut self, v: Option<&str>) -> Self {
        self.inner.color = v.map(str::to_string);
        self
    }

    pub fn build(self) -> CreateCourse {
        self.inner
    }
}

#[cfg(test)]
mod course_builders_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_load_the_canonical_course() {
        let row = CourseRowBuilder::default().build();
        assert_eq!(row.id, "course-fixed-0001");
        assert_eq!(row.weekdays, "0,2");
        assert_eq!(row.end_date, date("2025-07-29"));
    }

    #[rstest]
    fn it_should_mirror_the_canonical_course_in_the_command() {
        let command = CreateCourseBuilder::default().build();
        assert_eq!(command.name, "Judo Juniors");
        assert_eq!(command.sessions_count, 8);
        assert_eq!(command.color.as_deref(), Some("#3B82F6"));
    }
}
