//! Data models for exams and their questions as exchanged with the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty of an exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub fn all() -> [Level; 3] {
        [Level::Easy, Level::Medium, Level::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
        }
    }

    pub fn next(&self) -> Level {
        match self {
            Level::Easy => Level::Medium,
            Level::Medium => Level::Hard,
            Level::Hard => Level::Easy,
        }
    }

    pub fn previous(&self) -> Level {
        match self {
            Level::Easy => Level::Hard,
            Level::Medium => Level::Easy,
            Level::Hard => Level::Medium,
        }
    }
}

/// Question type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "ARRANGE")]
    Arrange,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "Multiple choice test",
            QuestionType::Arrange => "Complete the sentence",
        }
    }

    pub fn toggled(&self) -> QuestionType {
        match self {
            QuestionType::Mcq => QuestionType::Arrange,
            QuestionType::Arrange => QuestionType::Mcq,
        }
    }
}

/// Exam summary as embedded in chapters and exam lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub chapter_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_exam: u32,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A question option as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub content: String,
}

/// Correct answer on the wire: a single option text or an ordered text list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Sequence(Vec<String>),
}

impl Default for AnswerValue {
    fn default() -> Self {
        AnswerValue::Text(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub order: u32,
    #[serde(rename = "type", default)]
    pub kind: QuestionType,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub correct_answer: AnswerValue,
}

/// Full exam including its questions
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDetail {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub chapter_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_exam: u32,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Body for exam create/update, produced by the editor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequest {
    pub name: String,
    pub level: Level,
    pub time_exam: u32,
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
}
