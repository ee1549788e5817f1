use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::core::course::CourseRow;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCourse {
    pub id: String,
    pub name: String,
    pub teacher: String,
    pub start_date: String,
    pub end_date: String,
    pub time: String,
    pub duration: i64,
    pub sessions_count: i64,
    pub sessions_per_week: i64,
    pub weekdays: String,
    pub color: String,
}

impl From<CourseRow> for GqlCourse {
    fn from(row: CourseRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            teacher: row.teacher,
            start_date: row.start_date.to_string(),
            end_date: row.end_date.to_string(),
            time: row.time,
            duration: row.duration,
            sessions_count: row.sessions_count,
            sessions_per_week: row.sessions_per_week,
            weekdays: row.weekdays,
            color: row.color,
        }
    }
}

#[derive(Default)]
pub struct CourseQuery;

#[Object]
impl CourseQuery {
    async fn courses(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        let rows = state.courses.list().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn course(&self, context: &Context<'_>, id: String) -> GqlResult<GqlCourse> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.courses.get(&id).await?.into())
    }
}
