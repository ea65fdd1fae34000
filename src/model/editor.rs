//! Exam question editor
//!
//! Holds the complete question set of one exam in memory. Nothing is sent to
//! the backend until [`ExamEditor::to_request`] produces the batch body.
//!
//! Invariants kept by every operation:
//! - question orders are exactly `1..=n`
//! - option ids of a question are exactly `1..=m`
//! - the answer shape matches the question type (text for MCQ, ordered
//!   option references for ARRANGE)

use super::exam::{AnswerValue, ExamDetail, ExamRequest, Level, Question, QuestionOption, QuestionType};
use super::reorder::move_element;
use tracing::warn;

/// Order of the question selected when the editor opens
pub const FIRST_ORDER: u32 = 1;

/// Prompt given to a fresh arrange question
pub const ARRANGE_PROMPT: &str = "Arrange the words into meaningful sentences.";

/// Locally generated option identifier
pub type OptionId = u32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Duplicate answer")]
    DuplicateAnswer,
    #[error("Please select a course to create an exam")]
    MissingChapter,
    #[error("Please enter exam information before submitting (including name, level, time limit)")]
    MissingExamInfo,
    #[error("Please add at least one question before submitting")]
    NoQuestions,
    #[error("No question selected")]
    NoQuestion,
    #[error("Option {0} does not exist")]
    UnknownOption(OptionId),
    #[error("Only multiple choice questions have a single correct answer")]
    NotMultipleChoice,
    #[error("Only arrange questions can be reordered")]
    NotArrange,
    #[error("Position is out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDraft {
    pub id: OptionId,
    pub content: String,
}

/// Correct answer whose shape follows the question type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectAnswer {
    /// MCQ: text of the correct option
    Text(String),
    /// ARRANGE: option references in target order
    Sequence(Vec<OptionId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub order: u32,
    pub kind: QuestionType,
    pub content: String,
    pub options: Vec<OptionDraft>,
    pub answer: CorrectAnswer,
    /// False once the arrange order has been touched
    pub initial_order: bool,
}

impl QuestionDraft {
    fn new(order: u32) -> Self {
        Self {
            order,
            kind: QuestionType::Mcq,
            content: String::new(),
            options: Vec::new(),
            answer: CorrectAnswer::Text(String::new()),
            initial_order: true,
        }
    }

    pub fn option(&self, id: OptionId) -> Option<&OptionDraft> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Text of the MCQ answer, if this is an MCQ question
    pub fn answer_text(&self) -> Option<&str> {
        match &self.answer {
            CorrectAnswer::Text(text) => Some(text),
            CorrectAnswer::Sequence(_) => None,
        }
    }

    /// Arranged answer resolved to option contents
    pub fn arranged_contents(&self) -> Vec<&str> {
        match &self.answer {
            CorrectAnswer::Sequence(ids) => ids
                .iter()
                .filter_map(|id| self.option(*id))
                .map(|o| o.content.as_str())
                .collect(),
            CorrectAnswer::Text(_) => Vec::new(),
        }
    }

    fn is_correct_option(&self, option: &OptionDraft) -> bool {
        matches!(&self.answer, CorrectAnswer::Text(text) if !text.is_empty() && *text == option.content)
    }

    fn to_wire(&self) -> Question {
        let correct_answer = match &self.answer {
            CorrectAnswer::Text(text) => AnswerValue::Text(text.clone()),
            CorrectAnswer::Sequence(_) => AnswerValue::Sequence(
                self.arranged_contents()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
        };
        Question {
            content: self.content.clone(),
            order: self.order,
            kind: self.kind,
            options: self
                .options
                .iter()
                .map(|o| QuestionOption {
                    id: String::new(),
                    content: o.content.clone(),
                })
                .collect(),
            correct_answer,
        }
    }

    fn from_wire(question: &Question, order: u32) -> Self {
        let options: Vec<OptionDraft> = question
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionDraft {
                id: index as OptionId + 1,
                content: option.content.clone(),
            })
            .collect();

        let answer = match (question.kind, &question.correct_answer) {
            (QuestionType::Mcq, AnswerValue::Text(text)) => CorrectAnswer::Text(text.clone()),
            (QuestionType::Mcq, AnswerValue::Sequence(values)) => {
                CorrectAnswer::Text(values.first().cloned().unwrap_or_default())
            }
            (QuestionType::Arrange, AnswerValue::Sequence(values)) => {
                CorrectAnswer::Sequence(resolve_references(&options, values, order))
            }
            (QuestionType::Arrange, AnswerValue::Text(_)) => {
                CorrectAnswer::Sequence(options.iter().map(|o| o.id).collect())
            }
        };

        Self {
            order,
            kind: question.kind,
            content: question.content.clone(),
            options,
            answer,
            initial_order: true,
        }
    }
}

/// Map arranged answer texts back to option ids, each option used at most once
fn resolve_references(options: &[OptionDraft], values: &[String], order: u32) -> Vec<OptionId> {
    let mut used: Vec<OptionId> = Vec::new();
    for value in values {
        match options
            .iter()
            .find(|o| o.content == *value && !used.contains(&o.id))
        {
            Some(option) => used.push(option.id),
            None => warn!(order, value = %value, "arranged answer has no matching option, dropped"),
        }
    }
    used
}

/// Exam-level fields edited alongside the questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamInfo {
    pub name: String,
    pub level: Level,
    /// Time limit in minutes
    pub time_exam: u32,
    pub description: String,
}

impl Default for ExamInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: Level::Easy,
            time_exam: 30,
            description: String::new(),
        }
    }
}

/// In-memory editor for one exam
#[derive(Debug, Clone)]
pub struct ExamEditor {
    /// Set when editing an existing exam
    pub exam_id: Option<String>,
    /// Chapter a new exam is created in
    pub chapter_id: Option<String>,
    pub info: ExamInfo,
    questions: Vec<QuestionDraft>,
    current_order: u32,
}

impl ExamEditor {
    /// Editor for a new exam in the given chapter
    pub fn new(chapter_id: Option<String>) -> Self {
        Self {
            exam_id: None,
            chapter_id,
            info: ExamInfo::default(),
            questions: Vec::new(),
            current_order: FIRST_ORDER,
        }
    }

    /// Editor pre-filled from an existing exam
    pub fn from_exam(exam: &ExamDetail) -> Self {
        let mut wire: Vec<&Question> = exam.questions.iter().collect();
        wire.sort_by_key(|q| q.order);

        let questions = wire
            .into_iter()
            .enumerate()
            .map(|(index, q)| QuestionDraft::from_wire(q, index as u32 + 1))
            .collect();

        Self {
            exam_id: Some(exam.id.clone()),
            chapter_id: (!exam.chapter_id.is_empty()).then(|| exam.chapter_id.clone()),
            info: ExamInfo {
                name: exam.name.clone(),
                level: exam.level,
                time_exam: exam.time_exam,
                description: exam.description.clone(),
            },
            questions,
            current_order: FIRST_ORDER,
        }
    }

    pub fn is_new(&self) -> bool {
        self.exam_id.is_none()
    }

    pub fn questions(&self) -> &[QuestionDraft] {
        &self.questions
    }

    pub fn current_order(&self) -> u32 {
        self.current_order
    }

    /// Highest order in the list, 0 when empty
    pub fn max_order(&self) -> u32 {
        self.questions.iter().map(|q| q.order).max().unwrap_or(0)
    }

    pub fn current(&self) -> Option<&QuestionDraft> {
        self.questions.iter().find(|q| q.order == self.current_order)
    }

    fn current_mut(&mut self) -> Result<&mut QuestionDraft, EditorError> {
        let order = self.current_order;
        self.questions
            .iter_mut()
            .find(|q| q.order == order)
            .ok_or(EditorError::NoQuestion)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Questions
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an empty MCQ question and select it
    pub fn add_question(&mut self) -> u32 {
        let order = self.questions.len() as u32 + 1;
        self.questions.push(QuestionDraft::new(order));
        self.current_order = order;
        order
    }

    pub fn set_question_content(&mut self, content: &str) -> Result<(), EditorError> {
        self.current_mut()?.content = content.to_string();
        Ok(())
    }

    /// Switch the selected question's type, reshaping its answer
    pub fn change_type(&mut self, kind: QuestionType) -> Result<(), EditorError> {
        let question = self.current_mut()?;
        if question.kind == kind {
            return Ok(());
        }

        question.kind = kind;
        match kind {
            QuestionType::Arrange => {
                question.answer =
                    CorrectAnswer::Sequence(question.options.iter().map(|o| o.id).collect());
                question.initial_order = true;
                if question.content.is_empty() {
                    question.content = ARRANGE_PROMPT.to_string();
                }
            }
            QuestionType::Mcq => {
                question.answer = CorrectAnswer::Text(
                    question
                        .options
                        .first()
                        .map(|o| o.content.clone())
                        .unwrap_or_default(),
                );
                if question.content == ARRANGE_PROMPT {
                    question.content.clear();
                }
            }
        }
        Ok(())
    }

    /// Delete the selected question and renumber the rest from 1
    pub fn delete_question(&mut self) -> Result<(), EditorError> {
        let order = self.current_order;
        let before = self.questions.len();
        self.questions.retain(|q| q.order != order);
        if self.questions.len() == before {
            return Err(EditorError::NoQuestion);
        }

        for (index, question) in self.questions.iter_mut().enumerate() {
            question.order = index as u32 + 1;
        }
        self.current_order = self
            .questions
            .first()
            .map(|q| q.order)
            .unwrap_or(FIRST_ORDER);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn previous_question(&mut self) -> bool {
        if self.current_order > FIRST_ORDER {
            self.current_order -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_question(&mut self) -> bool {
        if self.current_order < self.max_order() {
            self.current_order += 1;
            true
        } else {
            false
        }
    }

    pub fn select_question(&mut self, order: u32) -> bool {
        if (FIRST_ORDER..=self.max_order()).contains(&order) {
            self.current_order = order;
            true
        } else {
            false
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Options
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an empty option; arrange questions also append it to the answer
    pub fn add_option(&mut self) -> Result<OptionId, EditorError> {
        let question = self.current_mut()?;
        let id = question.options.len() as OptionId + 1;
        question.options.push(OptionDraft {
            id,
            content: String::new(),
        });
        if let CorrectAnswer::Sequence(ids) = &mut question.answer {
            ids.push(id);
        }
        Ok(id)
    }

    /// Replace an option's text
    ///
    /// For MCQ a value equal to the current correct answer is rejected. When
    /// the edited option is the correct one, the answer follows the new text.
    pub fn edit_option(&mut self, id: OptionId, value: &str) -> Result<(), EditorError> {
        let question = self.current_mut()?;
        let index = question
            .options
            .iter()
            .position(|o| o.id == id)
            .ok_or(EditorError::UnknownOption(id))?;

        if !value.is_empty() && question.answer_text() == Some(value) {
            return Err(EditorError::DuplicateAnswer);
        }

        let was_correct = question.is_correct_option(&question.options[index]);
        question.options[index].content = value.to_string();
        if was_correct {
            question.answer = CorrectAnswer::Text(value.to_string());
        }
        Ok(())
    }

    /// Remove an option and renumber the rest by index
    pub fn delete_option(&mut self, id: OptionId) -> Result<(), EditorError> {
        let question = self.current_mut()?;
        let index = question
            .options
            .iter()
            .position(|o| o.id == id)
            .ok_or(EditorError::UnknownOption(id))?;
        question.options.remove(index);

        // old id -> new id
        let mut remap: Vec<(OptionId, OptionId)> = Vec::with_capacity(question.options.len());
        for (index, option) in question.options.iter_mut().enumerate() {
            let new_id = index as OptionId + 1;
            remap.push((option.id, new_id));
            option.id = new_id;
        }

        match &mut question.answer {
            CorrectAnswer::Sequence(ids) => {
                *ids = ids
                    .iter()
                    .filter_map(|old| remap.iter().find(|(o, _)| o == old).map(|(_, n)| *n))
                    .collect();
            }
            CorrectAnswer::Text(text) => {
                if !question.options.iter().any(|o| o.content == *text) {
                    text.clear();
                }
            }
        }
        Ok(())
    }

    /// Mark an option as the MCQ answer
    pub fn set_correct_answer(&mut self, id: OptionId) -> Result<(), EditorError> {
        let question = self.current_mut()?;
        if question.kind != QuestionType::Mcq {
            return Err(EditorError::NotMultipleChoice);
        }
        let content = question
            .option(id)
            .map(|o| o.content.clone())
            .ok_or(EditorError::UnknownOption(id))?;

        if question.answer_text() == Some(content.as_str()) {
            return Err(EditorError::DuplicateAnswer);
        }
        question.answer = CorrectAnswer::Text(content);
        Ok(())
    }

    /// Move an entry of the arranged answer from one position to another
    pub fn move_answer(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        let question = self.current_mut()?;
        let CorrectAnswer::Sequence(ids) = &mut question.answer else {
            return Err(EditorError::NotArrange);
        };
        if !move_element(ids, from, to) {
            return Err(EditorError::OutOfRange);
        }
        if from != to {
            question.initial_order = false;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submit
    // ─────────────────────────────────────────────────────────────────────────

    pub fn validate(&self) -> Result<(), EditorError> {
        if self.is_new() && self.chapter_id.as_deref().map_or(true, str::is_empty) {
            return Err(EditorError::MissingChapter);
        }
        if self.info.name.trim().is_empty() || self.info.time_exam == 0 {
            return Err(EditorError::MissingExamInfo);
        }
        if self.questions.is_empty() {
            return Err(EditorError::NoQuestions);
        }
        Ok(())
    }

    /// Serialize the whole question set into one request body
    pub fn to_request(&self) -> Result<ExamRequest, EditorError> {
        self.validate()?;
        Ok(ExamRequest {
            name: self.info.name.trim().to_string(),
            level: self.info.level,
            time_exam: self.info.time_exam,
            description: self.info.description.clone(),
            questions: self.questions.iter().map(QuestionDraft::to_wire).collect(),
            chapter_id: if self.is_new() {
                self.chapter_id.clone()
            } else {
                None
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_questions(contents: &[&str]) -> ExamEditor {
        let mut editor = ExamEditor::new(Some("chapter-1".to_string()));
        editor.info.name = "Weekly quiz".to_string();
        for content in contents {
            editor.add_question();
            editor.set_question_content(content).unwrap();
        }
        editor
    }

    fn with_options(editor: &mut ExamEditor, values: &[&str]) {
        for value in values {
            let id = editor.add_option().unwrap();
            editor.edit_option(id, value).unwrap();
        }
    }

    fn orders(editor: &ExamEditor) -> Vec<u32> {
        editor.questions().iter().map(|q| q.order).collect()
    }

    #[test]
    fn test_add_question_appends_and_selects() {
        let mut editor = ExamEditor::new(None);
        assert_eq!(editor.add_question(), 1);
        assert_eq!(editor.add_question(), 2);
        assert_eq!(editor.current_order(), 2);
        assert_eq!(editor.current().unwrap().kind, QuestionType::Mcq);
        assert_eq!(editor.current().unwrap().answer, CorrectAnswer::Text(String::new()));
    }

    #[test]
    fn test_delete_middle_question_renumbers() {
        let mut editor = editor_with_questions(&["first", "second", "third"]);
        assert!(editor.select_question(2));
        editor.delete_question().unwrap();

        assert_eq!(orders(&editor), vec![1, 2]);
        let contents: Vec<&str> = editor.questions().iter().map(|q| q.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "third"]);
        assert_eq!(editor.current_order(), 1);
    }

    #[test]
    fn test_delete_keeps_orders_contiguous() {
        for k in 1..=5 {
            let mut editor = editor_with_questions(&["a", "b", "c", "d", "e"]);
            editor.select_question(k);
            editor.delete_question().unwrap();
            assert_eq!(orders(&editor), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_delete_last_question_resets_selection() {
        let mut editor = editor_with_questions(&["only"]);
        editor.delete_question().unwrap();
        assert!(editor.questions().is_empty());
        assert_eq!(editor.current_order(), FIRST_ORDER);
        assert_eq!(editor.delete_question(), Err(EditorError::NoQuestion));
    }

    #[test]
    fn test_navigation_bounds() {
        let mut editor = editor_with_questions(&["a", "b", "c"]);
        assert!(editor.select_question(1));
        assert!(!editor.previous_question());
        assert!(editor.next_question());
        assert!(editor.next_question());
        assert!(!editor.next_question());
        assert_eq!(editor.current_order(), 3);
        assert!(!editor.select_question(0));
        assert!(!editor.select_question(4));
    }

    #[test]
    fn test_mcq_to_arrange_takes_option_list() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["I", "am", "here"]);

        editor.change_type(QuestionType::Arrange).unwrap();
        let question = editor.current().unwrap();
        assert_eq!(question.answer, CorrectAnswer::Sequence(vec![1, 2, 3]));
        assert_eq!(question.arranged_contents(), vec!["I", "am", "here"]);
        assert_eq!(question.options.len(), 3);
        assert_eq!(question.content, "q");
    }

    #[test]
    fn test_arrange_to_mcq_takes_first_option() {
        let mut editor = editor_with_questions(&[""]);
        editor.change_type(QuestionType::Arrange).unwrap();
        assert_eq!(editor.current().unwrap().content, ARRANGE_PROMPT);
        with_options(&mut editor, &["x", "y"]);

        editor.change_type(QuestionType::Mcq).unwrap();
        let question = editor.current().unwrap();
        assert_eq!(question.answer, CorrectAnswer::Text("x".to_string()));
        assert_eq!(question.content, "");
        assert_eq!(question.options.len(), 2);
    }

    #[test]
    fn test_arrange_to_mcq_without_options_is_empty_text() {
        let mut editor = editor_with_questions(&["q"]);
        editor.change_type(QuestionType::Arrange).unwrap();
        editor.change_type(QuestionType::Mcq).unwrap();
        assert_eq!(editor.current().unwrap().answer, CorrectAnswer::Text(String::new()));
    }

    #[test]
    fn test_setting_same_correct_answer_is_rejected() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["a", "b"]);
        editor.set_correct_answer(2).unwrap();
        let before = editor.questions().to_vec();

        assert_eq!(editor.set_correct_answer(2), Err(EditorError::DuplicateAnswer));
        assert_eq!(editor.questions(), before.as_slice());
    }

    #[test]
    fn test_editing_option_to_answer_text_is_rejected() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["a", "b"]);
        editor.set_correct_answer(1).unwrap();

        assert_eq!(editor.edit_option(2, "a"), Err(EditorError::DuplicateAnswer));
        assert_eq!(editor.current().unwrap().option(2).unwrap().content, "b");
    }

    #[test]
    fn test_editing_correct_option_carries_answer() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["a", "b"]);
        editor.set_correct_answer(1).unwrap();
        editor.edit_option(1, "alpha").unwrap();
        assert_eq!(editor.current().unwrap().answer_text(), Some("alpha"));
    }

    #[test]
    fn test_delete_option_renumbers_and_rebuilds_sequence() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["a", "b", "c", "d"]);
        editor.change_type(QuestionType::Arrange).unwrap();
        editor.move_answer(3, 0).unwrap(); // d a b c

        editor.delete_option(2).unwrap(); // drop "b"
        let question = editor.current().unwrap();
        let ids: Vec<OptionId> = question.options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(question.arranged_contents(), vec!["d", "a", "c"]);
    }

    #[test]
    fn test_delete_correct_mcq_option_clears_answer() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["a", "b"]);
        editor.set_correct_answer(2).unwrap();
        editor.delete_option(2).unwrap();
        assert_eq!(editor.current().unwrap().answer_text(), Some(""));
    }

    #[test]
    fn test_reorder_marks_order_touched() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["one", "two", "three"]);
        editor.change_type(QuestionType::Arrange).unwrap();
        assert!(editor.current().unwrap().initial_order);

        editor.move_answer(0, 2).unwrap();
        let question = editor.current().unwrap();
        assert!(!question.initial_order);
        assert_eq!(question.arranged_contents(), vec!["two", "three", "one"]);
        assert_eq!(editor.move_answer(0, 9), Err(EditorError::OutOfRange));
    }

    #[test]
    fn test_reorder_requires_arrange() {
        let mut editor = editor_with_questions(&["q"]);
        with_options(&mut editor, &["a", "b"]);
        assert_eq!(editor.move_answer(0, 1), Err(EditorError::NotArrange));
    }

    #[test]
    fn test_added_arrange_option_joins_sequence() {
        let mut editor = editor_with_questions(&["q"]);
        editor.change_type(QuestionType::Arrange).unwrap();
        with_options(&mut editor, &["hello", "world"]);
        assert_eq!(
            editor.current().unwrap().arranged_contents(),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn test_submit_without_questions_is_rejected() {
        let editor = editor_with_questions(&[]);
        assert_eq!(editor.to_request(), Err(EditorError::NoQuestions));
        assert!(editor.questions().is_empty());
    }

    #[test]
    fn test_submit_without_exam_info_is_rejected() {
        let mut editor = editor_with_questions(&["q"]);
        editor.info.name = "  ".to_string();
        assert_eq!(editor.to_request(), Err(EditorError::MissingExamInfo));

        editor.info.name = "Quiz".to_string();
        editor.info.time_exam = 0;
        assert_eq!(editor.to_request(), Err(EditorError::MissingExamInfo));
        assert_eq!(editor.questions().len(), 1);
    }

    #[test]
    fn test_new_exam_requires_chapter() {
        let mut editor = ExamEditor::new(None);
        editor.info.name = "Quiz".to_string();
        editor.add_question();
        assert_eq!(editor.to_request(), Err(EditorError::MissingChapter));
    }

    #[test]
    fn test_request_serialization() {
        let mut editor = editor_with_questions(&["pick", "arrange"]);
        editor.select_question(1);
        with_options(&mut editor, &["a", "b"]);
        editor.set_correct_answer(2).unwrap();

        editor.select_question(2);
        with_options(&mut editor, &["am", "I"]);
        editor.change_type(QuestionType::Arrange).unwrap();
        editor.move_answer(1, 0).unwrap();

        let request = editor.to_request().unwrap();
        assert_eq!(request.chapter_id.as_deref(), Some("chapter-1"));
        assert_eq!(request.questions[0].correct_answer, AnswerValue::Text("b".to_string()));
        assert_eq!(
            request.questions[1].correct_answer,
            AnswerValue::Sequence(vec!["I".to_string(), "am".to_string()])
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["timeExam"], 30);
        assert_eq!(json["level"], "EASY");
        assert_eq!(json["questions"][1]["type"], "ARRANGE");
        assert_eq!(json["questions"][1]["options"][0], serde_json::json!({"content": "am"}));
        assert_eq!(json["questions"][1]["correctAnswer"], serde_json::json!(["I", "am"]));
    }

    #[test]
    fn test_from_exam_maps_arrange_answers_to_options() {
        let json = r#"{
            "_id": "e1",
            "name": "Quiz",
            "timeExam": 45,
            "level": "MEDIUM",
            "questions": [
                {"order": 2, "type": "ARRANGE", "content": "Arrange",
                 "options": [{"content": "b"}, {"content": "a"}, {"content": "b"}],
                 "correctAnswer": ["a", "b", "b", "zzz"]},
                {"order": 1, "content": "Pick", "options": [{"content": "x"}], "correctAnswer": "x"}
            ]
        }"#;
        let detail: ExamDetail = serde_json::from_str(json).unwrap();
        let editor = ExamEditor::from_exam(&detail);

        assert!(!editor.is_new());
        assert_eq!(editor.info.level, Level::Medium);
        assert_eq!(editor.current().unwrap().content, "Pick");
        let arrange = &editor.questions()[1];
        assert_eq!(arrange.answer, CorrectAnswer::Sequence(vec![2, 1, 3]));
        assert_eq!(arrange.arranged_contents(), vec!["a", "b", "b"]);

        let request = editor.to_request().unwrap();
        assert_eq!(request.chapter_id, None);
    }
}
