//! External service interactions
//!
//! - `http` - JSON client, transport seam and the API error type
//! - `auth`, `course`, `chapter`, `exam`, `blog` - one service per resource
//! - `dispatch` - requests and replies as data
//! - `request_runner` - background execution for the UI loop

pub mod auth;
pub mod blog;
pub mod chapter;
pub mod course;
pub mod dispatch;
pub mod exam;
pub mod http;
pub mod request_runner;

pub use auth::AuthService;
pub use blog::BlogService;
pub use chapter::ChapterService;
pub use course::CourseService;
pub use dispatch::{Mutation, Reply, Request};
pub use exam::ExamService;
pub use http::{ApiClient, ApiError, ApiResult, HttpTransport, Transport};
pub use request_runner::{Completion, RequestRunner};

/// Every domain service over one shared client
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub course: CourseService,
    pub chapter: ChapterService,
    pub exam: ExamService,
    pub blog: BlogService,
}

impl Services {
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: AuthService::new(api.clone()),
            course: CourseService::new(api.clone()),
            chapter: ChapterService::new(api.clone()),
            exam: ExamService::new(api.clone()),
            blog: BlogService::new(api),
        }
    }
}
