use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::courses::core::calendar::CalendarEvent;
use crate::shared::core::primitives::{format_time, parse_date_or_today};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlCalendarEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub teacher: String,
    pub color: String,
    pub enrolled_count: u32,
    pub classes_remaining: u32,
}

impl From<CalendarEvent> for GqlCalendarEvent {
    fn from(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date.to_string(),
            time: format_time(event.time),
            duration: event.duration,
            teacher: event.teacher,
            color: event.color,
            enrolled_count: event.enrolled_count,
            classes_remaining: event.classes_remaining,
        }
    }
}

fn to_gql(events: Vec<CalendarEvent>) -> Vec<GqlCalendarEvent> {
    events.into_iter().map(Into::into).collect()
}

#[derive(Default)]
pub struct CalendarQuery;

#[Object]
impl CalendarQuery {
    async fn daily_calendar(
        &self,
        context: &Context<'_>,
        date: Option<String>,
    ) -> GqlResult<Vec<GqlCalendarEvent>> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_date_or_today(date.as_deref())?;
        let events = state
            .view_calendar
            .daily(date)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(to_gql(events))
    }

    async fn weekly_calendar(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
    ) -> GqlResult<Vec<GqlCalendarEvent>> {
        let state = context.data_unchecked::<AppState>();
        let start_date = parse_date_or_today(start_date.as_deref())?;
        let events = state
            .view_calendar
            .weekly(start_date)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(to_gql(events))
    }

    async fn monthly_calendar(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
    ) -> GqlResult<Vec<GqlCalendarEvent>> {
        let state = context.data_unchecked::<AppState>();
        let start_date = parse_date_or_today(start_date.as_deref())?;
        let events = state
            .view_calendar
            .monthly(start_date)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(to_gql(events))
    }
}
