//! Modal stack for managing overlays
//!
//! Confirmation dialogs, the chapter form and help all live on one
//! enum-based stack; only the top modal receives input.

use super::mutation::PendingMutation;

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Yes/No confirmation before a status change or delete
    Confirm { pending: PendingMutation },
    /// Chapter create/edit form; the form state lives in its component
    ChapterForm,
    /// Help dialog showing all keyboard shortcuts
    Help { scroll_offset: usize },
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every overlay, e.g. when the screen changes underneath
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_exam() -> Modal {
        Modal::Confirm {
            pending: PendingMutation::DeleteExam {
                exam_id: "e1".to_string(),
                name: "Quiz".to_string(),
            },
        }
    }

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(delete_exam());

        assert_eq!(stack.pop(), Some(delete_exam()));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help { scroll_offset: 0 });

        if let Some(Modal::Help { scroll_offset }) = stack.top_mut() {
            *scroll_offset = 2;
        }

        assert_eq!(stack.top(), Some(&Modal::Help { scroll_offset: 2 }));
    }

    #[test]
    fn test_clear() {
        let mut stack = ModalStack::new();
        stack.push(Modal::ChapterForm);
        stack.push(Modal::QuitConfirm);
        stack.clear();
        assert!(stack.top().is_none());
    }
}
