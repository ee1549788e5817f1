// Application state shared by the HTTP and GraphQL inbound adapters.
//
// Repositories are exposed for the read-only endpoints; every write goes through a handler.

use std::sync::Arc;

use crate::modules::coaches::adapters::outbound::coach_repository_in_memory::InMemoryCoaches;
use crate::modules::coaches::use_cases::register_coach::handler::RegisterCoachHandler;
use crate::modules::coaches::use_cases::update_coach::handler::UpdateCoachHandler;
use crate::modules::courses::adapters::outbound::course_repository_in_memory::InMemoryCourses;
use crate::modules::courses::adapters::outbound::enrollment_repository_in_memory::InMemoryEnrollments;
use crate::modules::courses::adapters::outbound::meeting_repository_in_memory::InMemoryMeetings;
use crate::modules::courses::use_cases::course_roster::handler::CourseRosterHandler;
use crate::modules::courses::use_cases::create_course::handler::CreateCourseHandler;
use crate::modules::courses::use_cases::delete_course::handler::DeleteCourseHandler;
use crate::modules::courses::use_cases::enroll_student::handler::EnrollStudentHandler;
use crate::modules::courses::use_cases::list_meetings::handler::ListMeetingsHandler;
use crate::modules::courses::use_cases::record_meeting::handler::RecordMeetingHandler;
use crate::modules::courses::use_cases::take_attendance::handler::TakeAttendanceHandler;
use crate::modules::courses::use_cases::update_course::handler::UpdateCourseHandler;
use crate::modules::courses::use_cases::view_calendar::handler::ViewCalendarHandler;
use crate::modules::payments::adapters::outbound::payment_repository_in_memory::InMemoryPayments;
use crate::modules::payments::use_cases::analyse_income::handler::AnalyseIncomeHandler;
use crate::modules::payments::use_cases::record_payment::handler::RecordPaymentHandler;
use crate::modules::students::adapters::outbound::student_repository_in_memory::InMemoryStudents;
use crate::modules::students::use_cases::delete_student::handler::DeleteStudentHandler;
use crate::modules::students::use_cases::register_student::handler::RegisterStudentHandler;
use crate::modules::students::use_cases::update_student::handler::UpdateStudentHandler;
use crate::modules::students::use_cases::view_student::handler::ViewStudentHandler;

type Courses = InMemoryCourses;
type Enrollments = InMemoryEnrollments;
type Meetings = InMemoryMeetings;
type Payments = InMemoryPayments;
type Students = InMemoryStudents;
type Coaches = InMemoryCoaches;

/// Storage the handlers are wired over. Tests seed these before building the state.
#[derive(Default)]
pub struct Repositories {
    pub courses: Arc<Courses>,
    pub enrollments: Arc<Enrollments>,
    pub meetings: Arc<Meetings>,
    pub payments: Arc<Payments>,
    pub students: Arc<Students>,
    pub coaches: Arc<Coaches>,
}

#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<Courses>,
    pub enrollments: Arc<Enrollments>,
    pub meetings: Arc<Meetings>,
    pub payments: Arc<Payments>,
    pub students: Arc<Students>,
    pub coaches: Arc<Coaches>,
    pub create_course: Arc<CreateCourseHandler<Courses>>,
    pub update_course: Arc<UpdateCourseHandler<Courses>>,
    pub delete_course: Arc<DeleteCourseHandler<Courses, Enrollments, Meetings, Payments>>,
    pub enroll_student: Arc<EnrollStudentHandler<Courses, Students, Enrollments>>,
    pub view_calendar: Arc<ViewCalendarHandler<Courses, Enrollments>>,
    pub course_roster: Arc<CourseRosterHandler<Courses, Enrollments, Students>>,
    pub record_meeting: Arc<RecordMeetingHandler<Courses, Enrollments, Meetings>>,
    pub take_attendance: Arc<TakeAttendanceHandler<Meetings>>,
    pub list_meetings: Arc<ListMeetingsHandler<Courses, Meetings, Students>>,
    pub register_student: Arc<RegisterStudentHandler<Students>>,
    pub update_student: Arc<UpdateStudentHandler<Students>>,
    pub delete_student: Arc<DeleteStudentHandler<Students, Enrollments, Meetings, Payments>>,
    pub view_student: Arc<ViewStudentHandler<Students, Courses, Enrollments, Payments>>,
    pub register_coach: Arc<RegisterCoachHandler<Coaches>>,
    pub update_coach: Arc<UpdateCoachHandler<Coaches>>,
    pub record_payment: Arc<RecordPaymentHandler<Courses, Students, Payments>>,
    pub analyse_income: Arc<AnalyseIncomeHandler<Courses, Payments>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::from_repositories(Repositories::default())
    }

    pub fn from_repositories(repositories: Repositories) -> Self {
        let Repositories {
            courses,
            enrollments,
            meetings,
            payments,
            students,
            coaches,
        } = repositories;

        Self {
            create_course: Arc::new(CreateCourseHandler::new(courses.clone())),
            update_course: Arc::new(UpdateCourseHandler::new(courses.clone())),
            delete_course: Arc::new(DeleteCourseHandler::new(
                courses.clone(),
                enrollments.clone(),
                meetings.clone(),
                payments.clone(),
            )),
            enroll_student: Arc::new(EnrollStudentHandler::new(
                courses.clone(),
                students.clone(),
                enrollments.clone(),
            )),
            view_calendar: Arc::new(ViewCalendarHandler::new(
                courses.clone(),
                enrollments.clone(),
            )),
            course_roster: Arc::new(CourseRosterHandler::new(
                courses.clone(),
                enrollments.clone(),
                students.clone(),
            )),
            record_meeting: Arc::new(RecordMeetingHandler::new(
                courses.clone(),
                enrollments.clone(),
                meetings.clone(),
            )),
            take_attendance: Arc::new(TakeAttendanceHandler::new(meetings.clone())),
            list_meetings: Arc::new(ListMeetingsHandler::new(
                courses.clone(),
                meetings.clone(),
                students.clone(),
            )),
            register_student: Arc::new(RegisterStudentHandler::new(students.clone())),
            update_student: Arc::new(UpdateStudentHandler::new(students.clone())),
            delete_student: Arc::new(DeleteStudentHandler::new(
                students.clone(),
                enrollments.clone(),
                meetings.clone(),
                payments.clone(),
            )),
            view_student: Arc::new(ViewStudentHandler::new(
                students.clone(),
                courses.clone(),
                enrollments.clone(),
                payments.clone(),
            )),
            register_coach: Arc::new(RegisterCoachHandler::new(coaches.clone())),
            update_coach: Arc::new(UpdateCoachHandler::new(coaches.clone())),
            record_payment: Arc::new(RecordPaymentHandler::new(
                courses.clone(),
                students.clone(),
                payments.clone(),
            )),
            analyse_income: Arc::new(AnalyseIncomeHandler::new(
                courses.clone(),
                payments.clone(),
            )),
            courses,
            enrollments,
            meetings,
            payments,
            students,
            coaches,
        }
    }
}
