//! Dashboard aggregates computed from full record dumps

use super::blog::{Blog, BlogStatus};
use super::course::Course;
use super::exam::Level;
use super::user::{AccountType, User};
use std::collections::BTreeMap;

/// Limit used to pull "everything" for the dashboard
pub const DASHBOARD_LIMIT: u32 = 100_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTotals {
    pub total: usize,
    pub free: usize,
    pub premium: usize,
    pub pending_requests: usize,
}

impl UserTotals {
    pub fn from_users(users: &[User]) -> Self {
        let mut totals = Self {
            total: users.len(),
            ..Self::default()
        };
        for user in users {
            match user.account_type {
                AccountType::Free => totals.free += 1,
                AccountType::Premium => totals.premium += 1,
            }
            if user.is_request_change_to_premium {
                totals.pending_requests += 1;
            }
        }
        totals
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTotals {
    pub courses: usize,
    pub chapters: usize,
    pub exams: usize,
    pub exams_by_level: BTreeMap<Level, usize>,
}

impl CourseTotals {
    /// Walk course -> chapters -> exams
    pub fn from_courses(courses: &[Course]) -> Self {
        let mut totals = Self {
            courses: courses.len(),
            ..Self::default()
        };
        for chapter in courses.iter().flat_map(|c| c.chapters.iter()) {
            totals.chapters += 1;
            for exam in &chapter.exams {
                totals.exams += 1;
                *totals.exams_by_level.entry(exam.level).or_default() += 1;
            }
        }
        totals
    }

    pub fn exams_at(&self, level: Level) -> usize {
        self.exams_by_level.get(&level).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogTotals {
    pub total: usize,
    pub likes: usize,
    pub by_status: BTreeMap<BlogStatus, usize>,
}

impl BlogTotals {
    pub fn from_blogs(blogs: &[Blog]) -> Self {
        let mut totals = Self {
            total: blogs.len(),
            ..Self::default()
        };
        for blog in blogs {
            totals.likes += blog.likes.len();
            *totals.by_status.entry(blog.status_blog).or_default() += 1;
        }
        totals
    }

    pub fn with_status(&self, status: BlogStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Everything the statistics screen shows apart from payments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub users: UserTotals,
    pub courses: CourseTotals,
    pub blogs: BlogTotals,
}

impl Dashboard {
    pub fn compute(users: &[User], courses: &[Course], blogs: &[Blog]) -> Self {
        Self {
            users: UserTotals::from_users(users),
            courses: CourseTotals::from_courses(courses),
            blogs: BlogTotals::from_blogs(blogs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::Chapter;
    use crate::model::exam::Exam;

    fn user(account_type: AccountType, requested: bool) -> User {
        User {
            account_type,
            is_request_change_to_premium: requested,
            ..User::default()
        }
    }

    fn exam(level: Level) -> Exam {
        Exam {
            level,
            ..Exam::default()
        }
    }

    fn blog(status: BlogStatus, likes: usize) -> Blog {
        Blog {
            status_blog: status,
            likes: (0..likes).map(|i| format!("u{}", i)).collect(),
            ..Blog::default()
        }
    }

    #[test]
    fn test_user_totals() {
        let users = vec![
            user(AccountType::Free, true),
            user(AccountType::Free, false),
            user(AccountType::Premium, false),
        ];
        assert_eq!(
            UserTotals::from_users(&users),
            UserTotals {
                total: 3,
                free: 2,
                premium: 1,
                pending_requests: 1,
            }
        );
    }

    #[test]
    fn test_exams_are_counted_through_chapters() {
        let courses = vec![
            Course {
                chapters: vec![
                    Chapter {
                        exams: vec![exam(Level::Easy), exam(Level::Hard)],
                        ..Chapter::default()
                    },
                    Chapter {
                        exams: vec![exam(Level::Easy)],
                        ..Chapter::default()
                    },
                ],
                ..Course::default()
            },
            Course::default(),
        ];
        let totals = CourseTotals::from_courses(&courses);
        assert_eq!(totals.courses, 2);
        assert_eq!(totals.chapters, 2);
        assert_eq!(totals.exams, 3);
        assert_eq!(totals.exams_at(Level::Easy), 2);
        assert_eq!(totals.exams_at(Level::Medium), 0);
        assert_eq!(totals.exams_at(Level::Hard), 1);
    }

    #[test]
    fn test_blog_totals() {
        let blogs = vec![
            blog(BlogStatus::Approved, 3),
            blog(BlogStatus::PendingApproved, 0),
            blog(BlogStatus::Approved, 1),
        ];
        let totals = BlogTotals::from_blogs(&blogs);
        assert_eq!(totals.total, 3);
        assert_eq!(totals.likes, 4);
        assert_eq!(totals.with_status(BlogStatus::Approved), 2);
        assert_eq!(totals.with_status(BlogStatus::Rejected), 0);
    }

    #[test]
    fn test_empty_dashboard() {
        assert_eq!(Dashboard::compute(&[], &[], &[]), Dashboard::default());
    }
}
