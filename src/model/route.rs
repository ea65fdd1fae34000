//! Route table - screens addressed by URL-like paths

use super::session::Session;

const LOGIN: &str = "/admin/auth/login";
const ADMIN: &str = "/admin";
const ACCOUNTS: &str = "/admin/account-manager";
const BLOGS: &str = "/admin/blogs-manager";
const COURSES: &str = "/admin/course-manager";
const NEW_COURSE: &str = "/admin/course-manager/new-course";
const CHAPTER: &str = "/admin/course-manager/chapter";
const EXAM: &str = "/admin/course-manager/exam-manager";
const NEW_EXAM: &str = "/admin/course-manager/exam-manager/new-exam";

/// A screen of the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Statistics,
    Accounts,
    Blogs,
    BlogDetail { blog_id: String },
    Courses,
    NewCourse,
    CourseDetail { course_id: String },
    ChapterExams { chapter_id: String },
    ExamEditor { exam_id: String },
    NewExam { chapter_id: String },
}

/// Sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Statistics,
    Accounts,
    Blogs,
    Courses,
}

impl Section {
    pub fn all() -> [Section; 4] {
        [
            Section::Statistics,
            Section::Accounts,
            Section::Blogs,
            Section::Courses,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Statistics => "Statistics",
            Section::Accounts => "Account manager",
            Section::Blogs => "Blog manager",
            Section::Courses => "Course manager",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Section::Statistics => Route::Statistics,
            Section::Accounts => Route::Accounts,
            Section::Blogs => Route::Blogs,
            Section::Courses => Route::Courses,
        }
    }
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN.to_string(),
            Route::Statistics => ADMIN.to_string(),
            Route::Accounts => ACCOUNTS.to_string(),
            Route::Blogs => BLOGS.to_string(),
            Route::BlogDetail { blog_id } => format!("{}/{}", BLOGS, blog_id),
            Route::Courses => COURSES.to_string(),
            Route::NewCourse => NEW_COURSE.to_string(),
            Route::CourseDetail { course_id } => format!("{}/{}", COURSES, course_id),
            Route::ChapterExams { chapter_id } => format!("{}/{}", CHAPTER, chapter_id),
            Route::ExamEditor { exam_id } => format!("{}/{}", EXAM, exam_id),
            Route::NewExam { chapter_id } => format!("{}/{}", NEW_EXAM, chapter_id),
        }
    }

    /// Resolve a path; unknown paths yield None
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        let param = |prefix: &str| -> Option<String> {
            let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
            (!rest.is_empty() && !rest.contains('/')).then(|| rest.to_string())
        };

        // Most specific prefixes first
        let route = match path {
            LOGIN => Route::Login,
            ADMIN => Route::Statistics,
            ACCOUNTS => Route::Accounts,
            BLOGS => Route::Blogs,
            COURSES => Route::Courses,
            NEW_COURSE => Route::NewCourse,
            _ => {
                if let Some(chapter_id) = param(NEW_EXAM) {
                    Route::NewExam { chapter_id }
                } else if let Some(exam_id) = param(EXAM) {
                    Route::ExamEditor { exam_id }
                } else if let Some(chapter_id) = param(CHAPTER) {
                    Route::ChapterExams { chapter_id }
                } else if let Some(course_id) = param(COURSES) {
                    Route::CourseDetail { course_id }
                } else if let Some(blog_id) = param(BLOGS) {
                    Route::BlogDetail { blog_id }
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }

    /// Sidebar section this screen belongs to
    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Login => None,
            Route::Statistics => Some(Section::Statistics),
            Route::Accounts => Some(Section::Accounts),
            Route::Blogs | Route::BlogDetail { .. } => Some(Section::Blogs),
            Route::Courses
            | Route::NewCourse
            | Route::CourseDetail { .. }
            | Route::ChapterExams { .. }
            | Route::ExamEditor { .. }
            | Route::NewExam { .. } => Some(Section::Courses),
        }
    }

    pub fn requires_admin(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Apply the session gate: admin routes need an admin session, and an
    /// admin session never sees the login screen
    pub fn gate(self, session: &Session) -> Route {
        match (self.requires_admin(), session.is_admin()) {
            (true, false) => Route::Login,
            (false, true) => Route::Statistics,
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session::CookieStore;
    use crate::model::user::{LoginResponse, Role, User};

    fn all_routes() -> Vec<Route> {
        vec![
            Route::Login,
            Route::Statistics,
            Route::Accounts,
            Route::Blogs,
            Route::BlogDetail { blog_id: "b1".to_string() },
            Route::Courses,
            Route::NewCourse,
            Route::CourseDetail { course_id: "c1".to_string() },
            Route::ChapterExams { chapter_id: "ch1".to_string() },
            Route::ExamEditor { exam_id: "e1".to_string() },
            Route::NewExam { chapter_id: "ch1".to_string() },
        ]
    }

    #[test]
    fn test_paths_resolve_back_to_routes() {
        for route in all_routes() {
            assert_eq!(Route::from_path(&route.path()), Some(route.clone()), "{}", route.path());
        }
    }

    #[test]
    fn test_new_course_is_not_a_course_id() {
        assert_eq!(
            Route::from_path("/admin/course-manager/new-course"),
            Some(Route::NewCourse)
        );
        assert_eq!(Route::from_path("/admin/course-manager/"), Some(Route::Courses));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::from_path("/admin/blogs-manager/b1/extra"), None);
    }

    #[test]
    fn test_gate_redirects_without_admin_session() {
        let mut session = Session::new(CookieStore::in_memory());
        assert_eq!(Route::Blogs.gate(&session), Route::Login);
        assert_eq!(Route::Login.gate(&session), Route::Login);

        session
            .init(LoginResponse {
                user: User {
                    id: "u1".to_string(),
                    role: Role::Admin,
                    ..User::default()
                },
                access_token: "t".to_string(),
            })
            .unwrap();
        assert_eq!(Route::Blogs.gate(&session), Route::Blogs);
        assert_eq!(Route::Login.gate(&session), Route::Statistics);
    }

    #[test]
    fn test_gate_rejects_non_admin_user() {
        let mut session = Session::new(CookieStore::in_memory());
        session
            .init(LoginResponse {
                user: User {
                    id: "u2".to_string(),
                    role: Role::User,
                    ..User::default()
                },
                access_token: "t".to_string(),
            })
            .unwrap();
        assert_eq!(Route::Accounts.gate(&session), Route::Login);
    }
}
