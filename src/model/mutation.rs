//! Server-side writes the console can issue

use super::blog::BlogStatus;
use super::user::AccountType;

/// What a mutation does, used for logging and the failure notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    UpdateAccountType,
    UpdateBlogStatus,
    DeleteBlog,
    CreateCourse,
    UpdateCourse,
    CreateChapter,
    UpdateChapter,
    DeleteChapter,
    CreateExam,
    UpdateExam,
    DeleteExam,
}

impl MutationKind {
    /// Generic text shown when the call fails, whatever the cause
    pub fn failure_message(&self) -> &'static str {
        match self {
            MutationKind::UpdateAccountType | MutationKind::UpdateBlogStatus => {
                "Failed to update status."
            }
            MutationKind::DeleteBlog => "Failed to delete blog.",
            MutationKind::CreateCourse => "Failed to create course.",
            MutationKind::UpdateCourse => "Failed to update course.",
            MutationKind::CreateChapter => "Failed to create chapter.",
            MutationKind::UpdateChapter => "Failed to update chapter.",
            MutationKind::DeleteChapter => "Failed to delete chapter.",
            MutationKind::CreateExam => "Failed to create exam.",
            MutationKind::UpdateExam => "Failed to update exam.",
            MutationKind::DeleteExam => "Failed to delete exam.",
        }
    }
}

/// A destructive or status-changing call waiting for confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingMutation {
    SetAccountType {
        user_id: String,
        email: String,
        account_type: AccountType,
    },
    SetBlogStatus {
        blog_id: String,
        title: String,
        status: BlogStatus,
    },
    DeleteBlog {
        blog_id: String,
        title: String,
    },
    DeleteChapter {
        chapter_id: String,
        title: String,
    },
    DeleteExam {
        exam_id: String,
        name: String,
    },
}

impl PendingMutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            PendingMutation::SetAccountType { .. } => MutationKind::UpdateAccountType,
            PendingMutation::SetBlogStatus { .. } => MutationKind::UpdateBlogStatus,
            PendingMutation::DeleteBlog { .. } => MutationKind::DeleteBlog,
            PendingMutation::DeleteChapter { .. } => MutationKind::DeleteChapter,
            PendingMutation::DeleteExam { .. } => MutationKind::DeleteExam,
        }
    }

    /// Question asked in the confirmation dialog
    pub fn title(&self) -> String {
        match self {
            PendingMutation::SetAccountType { account_type, .. } => format!(
                "Are you sure you want to change account to {}?",
                account_type.as_str()
            ),
            PendingMutation::SetBlogStatus { status, .. } => {
                format!("Are you sure you want to {} blog?", status.verb())
            }
            PendingMutation::DeleteBlog { .. } => {
                "Are you sure you want to delete this blog?".to_string()
            }
            PendingMutation::DeleteChapter { .. } => {
                "Are you sure you want to delete this chapter?".to_string()
            }
            PendingMutation::DeleteExam { .. } => {
                "Are you sure you want to delete this exam?".to_string()
            }
        }
    }

    /// Record the dialog names
    pub fn subject(&self) -> String {
        match self {
            PendingMutation::SetAccountType { email, .. } => format!("Account: {}", email),
            PendingMutation::SetBlogStatus { title, .. }
            | PendingMutation::DeleteBlog { title, .. } => format!("Blog: {}", title),
            PendingMutation::DeleteChapter { title, .. } => format!("Chapter: {}", title),
            PendingMutation::DeleteExam { name, .. } => format!("Exam: {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_texts() {
        let pending = PendingMutation::SetAccountType {
            user_id: "u1".to_string(),
            email: "a@b.c".to_string(),
            account_type: AccountType::Premium,
        };
        assert_eq!(pending.title(), "Are you sure you want to change account to PREMIUM?");
        assert_eq!(pending.subject(), "Account: a@b.c");
        assert_eq!(pending.kind(), MutationKind::UpdateAccountType);

        let pending = PendingMutation::DeleteExam {
            exam_id: "e1".to_string(),
            name: "Final".to_string(),
        };
        assert_eq!(pending.subject(), "Exam: Final");
        assert_eq!(pending.kind().failure_message(), "Failed to delete exam.");
    }

    #[test]
    fn test_status_changes_share_failure_text() {
        assert_eq!(
            MutationKind::UpdateAccountType.failure_message(),
            MutationKind::UpdateBlogStatus.failure_message()
        );
    }
}
