//! Backend calls as values
//!
//! Screens describe what they need as a [`Request`]; [`execute`] maps it onto
//! the domain services and folds the outcome into a [`Reply`]. Both sides are
//! plain data so they can cross the worker thread boundary.

use super::http::{ApiError, ApiResult};
use super::Services;
use crate::model::blog::Blog;
use crate::model::course::{Chapter, ChapterInput, Course, CourseInput};
use crate::model::envelope::{ListQuery, Page};
use crate::model::exam::{Exam, ExamDetail, ExamRequest};
use crate::model::mutation::{MutationKind, PendingMutation};
use crate::model::payment::{PaymentStatistic, StatPeriod};
use crate::model::stats::{Dashboard, DASHBOARD_LIMIT};
use crate::model::user::{Credentials, LoginResponse, User};

/// A read the UI is waiting for
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Login(Credentials),
    Users(ListQuery),
    Blogs(ListQuery),
    Blog(String),
    Courses(ListQuery),
    Course(String),
    Chapters(ListQuery),
    Chapter(String),
    Exams { course_id: String, query: ListQuery },
    Exam(String),
    Dashboard,
    Payment(StatPeriod),
    Mutate(Mutation),
}

/// A write, confirmed or submitted from a form
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Confirmed(PendingMutation),
    CreateCourse(CourseInput),
    UpdateCourse { course_id: String, input: CourseInput },
    CreateChapter(ChapterInput),
    UpdateChapter { chapter_id: String, input: ChapterInput },
    CreateExam(ExamRequest),
    UpdateExam { exam_id: String, request: ExamRequest },
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Confirmed(pending) => pending.kind(),
            Mutation::CreateCourse(_) => MutationKind::CreateCourse,
            Mutation::UpdateCourse { .. } => MutationKind::UpdateCourse,
            Mutation::CreateChapter(_) => MutationKind::CreateChapter,
            Mutation::UpdateChapter { .. } => MutationKind::UpdateChapter,
            Mutation::CreateExam(_) => MutationKind::CreateExam,
            Mutation::UpdateExam { .. } => MutationKind::UpdateExam,
        }
    }
}

impl Request {
    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            Request::Login(_) => "login",
            Request::Users(_) => "users",
            Request::Blogs(_) => "blogs",
            Request::Blog(_) => "blog",
            Request::Courses(_) => "courses",
            Request::Course(_) => "course",
            Request::Chapters(_) => "chapters",
            Request::Chapter(_) => "chapter",
            Request::Exams { .. } => "exams",
            Request::Exam(_) => "exam",
            Request::Dashboard => "dashboard",
            Request::Payment(_) => "payment",
            Request::Mutate(_) => "mutation",
        }
    }
}

/// Outcome of a [`Request`]
#[derive(Debug, Clone)]
pub enum Reply {
    Login(ApiResult<LoginResponse>),
    Users(ApiResult<Page<User>>),
    Blogs(ApiResult<Page<Blog>>),
    Blog(ApiResult<Blog>),
    Courses(ApiResult<Page<Course>>),
    Course(ApiResult<Course>),
    Chapters(ApiResult<Page<Chapter>>),
    Chapter(ApiResult<Chapter>),
    Exams(ApiResult<Page<Exam>>),
    Exam(ApiResult<ExamDetail>),
    Dashboard(ApiResult<Dashboard>),
    Payment(ApiResult<PaymentStatistic>),
    /// Success carries the envelope message
    Mutation {
        kind: MutationKind,
        result: ApiResult<String>,
    },
}

impl Reply {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Reply::Login(r) => r.as_ref().err(),
            Reply::Users(r) => r.as_ref().err(),
            Reply::Blogs(r) => r.as_ref().err(),
            Reply::Blog(r) => r.as_ref().err(),
            Reply::Courses(r) => r.as_ref().err(),
            Reply::Course(r) => r.as_ref().err(),
            Reply::Chapters(r) => r.as_ref().err(),
            Reply::Chapter(r) => r.as_ref().err(),
            Reply::Exams(r) => r.as_ref().err(),
            Reply::Exam(r) => r.as_ref().err(),
            Reply::Dashboard(r) => r.as_ref().err(),
            Reply::Payment(r) => r.as_ref().err(),
            Reply::Mutation { result, .. } => result.as_ref().err(),
        }
    }
}

/// Run a request against the services; blocks the calling thread
pub fn execute(services: &Services, request: Request) -> Reply {
    match request {
        Request::Login(credentials) => {
            Reply::Login(services.auth.login(&credentials).map(|e| e.data))
        }
        Request::Users(query) => Reply::Users(services.auth.list_users(&query).map(|e| e.data)),
        Request::Blogs(query) => Reply::Blogs(services.blog.list(&query).map(|e| e.data)),
        Request::Blog(id) => Reply::Blog(services.blog.detail(&id).map(|e| e.data)),
        Request::Courses(query) => Reply::Courses(services.course.list(&query).map(|e| e.data)),
        Request::Course(id) => Reply::Course(services.course.detail(&id).map(|e| e.data)),
        Request::Chapters(query) => {
            Reply::Chapters(services.chapter.list(&query).map(|e| e.data))
        }
        Request::Chapter(id) => Reply::Chapter(services.chapter.detail(&id).map(|e| e.data)),
        Request::Exams { course_id, query } => Reply::Exams(
            services
                .exam
                .list_in_course(&course_id, &query)
                .map(|e| e.data),
        ),
        Request::Exam(id) => Reply::Exam(services.exam.detail(&id).map(|e| e.data)),
        Request::Dashboard => Reply::Dashboard(dashboard(services)),
        Request::Payment(period) => {
            Reply::Payment(services.auth.payment_statistic(period).map(|e| e.data))
        }
        Request::Mutate(mutation) => {
            let kind = mutation.kind();
            Reply::Mutation {
                kind,
                result: mutate(services, mutation),
            }
        }
    }
}

/// Pull every user, course and blog and aggregate them
fn dashboard(services: &Services) -> ApiResult<Dashboard> {
    let query = ListQuery::new(DASHBOARD_LIMIT);
    let users = services.auth.list_users(&query)?.data.data;
    let courses = services.course.list(&query)?.data.data;
    let blogs = services.blog.list(&query)?.data.data;
    Ok(Dashboard::compute(&users, &courses, &blogs))
}

fn mutate(services: &Services, mutation: Mutation) -> ApiResult<String> {
    let ack = match mutation {
        Mutation::Confirmed(PendingMutation::SetAccountType {
            user_id,
            account_type,
            ..
        }) => services.auth.update_account_type(&user_id, account_type)?,
        Mutation::Confirmed(PendingMutation::SetBlogStatus {
            blog_id, status, ..
        }) => services.blog.update_status(&blog_id, status)?,
        Mutation::Confirmed(PendingMutation::DeleteBlog { blog_id, .. }) => {
            services.blog.delete(&blog_id)?
        }
        Mutation::Confirmed(PendingMutation::DeleteChapter { chapter_id, .. }) => {
            services.chapter.delete(&chapter_id)?
        }
        Mutation::Confirmed(PendingMutation::DeleteExam { exam_id, .. }) => {
            services.exam.delete(&exam_id)?
        }
        Mutation::CreateCourse(input) => services.course.create(&input)?,
        Mutation::UpdateCourse { course_id, input } => services.course.update(&course_id, &input)?,
        Mutation::CreateChapter(input) => services.chapter.create(&input)?,
        Mutation::UpdateChapter { chapter_id, input } => {
            services.chapter.update(&chapter_id, &input)?
        }
        Mutation::CreateExam(request) => services.exam.create(&request)?,
        Mutation::UpdateExam { exam_id, request } => services.exam.update(&exam_id, &request)?,
    };
    Ok(ack.message)
}
