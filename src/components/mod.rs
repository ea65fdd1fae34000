//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.
//!
//! - screens, one per route: `login`, `statistics`, `accounts`, `blogs`,
//!   `blog_detail`, `courses`, `course_form`, `course_detail`,
//!   `chapter_exams`, `exam_editor`
//! - dialogs drawn over a screen: `confirm_dialog`, `chapter_dialog`,
//!   `help_dialog`
//! - building blocks: `layout`, `shell`, `form`, `resource_list`

pub mod accounts;
pub mod blog_detail;
pub mod blogs;
pub mod chapter_dialog;
pub mod chapter_exams;
pub mod confirm_dialog;
pub mod course_detail;
pub mod course_form;
pub mod courses;
pub mod exam_editor;
pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod login;
pub mod resource_list;
pub mod shell;
pub mod statistics;

pub use accounts::AccountsScreen;
pub use blog_detail::BlogDetailScreen;
pub use blogs::BlogsScreen;
pub use chapter_dialog::ChapterDialog;
pub use chapter_exams::ChapterExamsScreen;
pub use confirm_dialog::ConfirmDialog;
pub use course_detail::CourseDetailScreen;
pub use course_form::NewCourseScreen;
pub use courses::CoursesScreen;
pub use exam_editor::ExamEditorScreen;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use login::LoginScreen;
pub use shell::{draw_help_bar, draw_sidebar, draw_status_bar, ShellContext};
pub use statistics::StatisticsScreen;
