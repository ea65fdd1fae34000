//! Model layer - records, view state and the editor core
//!
//! - Wire records (`user`, `course`, `exam`, `blog`, `payment`, `envelope`)
//! - View state (`listing`, `modal`, `notice`, `route`, `session`)
//! - `ExamEditor` - in-memory question authoring

pub mod blog;
pub mod course;
pub mod editor;
pub mod envelope;
pub mod exam;
pub mod listing;
pub mod modal;
pub mod mutation;
pub mod notice;
pub mod payment;
pub mod reorder;
pub mod route;
pub mod session;
pub mod stats;
pub mod user;

// Re-export commonly used types
pub use blog::{Blog, BlogStatus};
pub use course::{Chapter, ChapterInput, Course, CourseInput};
pub use envelope::{Ack, Envelope, ListQuery, Page};
pub use exam::{Exam, ExamDetail, ExamRequest, Level};
pub use listing::Listing;
pub use mutation::{MutationKind, PendingMutation};
pub use notice::{Notice, NoticeLevel};
pub use payment::{PaymentStatistic, StatPeriod};
pub use route::{Route, Section};
pub use session::{CookieStore, Session};
pub use user::{AccountType, Credentials, LoginResponse, User};
