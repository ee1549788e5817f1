use async_graphql::{Context, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::courses::use_cases::create_course::command::CreateCourse;
use crate::modules::courses::use_cases::list_courses::inbound::graphql::GqlCourse;
use crate::shared::core::primitives::parse_date;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[allow(clippy::too_many_arguments)]
    async fn create_course(
        &self,
        context: &Context<'_>,
        name: String,
        teacher: String,
        start_date: String,
        time: String,
        sessions_count: i64,
        weekdays: String,
        duration: Option<i64>,
        color: Option<String>,
    ) -> GqlResult<GqlCourse> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateCourse {
            course_id: Uuid::now_v7().to_string(),
            name,
            teacher,
            start_date: parse_date(&start_date)?,
            time,
            duration,
            sessions_count,
            weekdays,
            color,
        };

        let row = state
            .create_course
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(row.into())
    }
}
