//! The fixed questionnaire and its four dimensions.

use std::fmt;
use std::sync::LazyLock;

use compass_core::error::DomainError;
use serde::Serialize;

/// Number of questions in a complete assessment.
pub const QUESTION_COUNT: usize = 16;

/// Number of questions belonging to each dimension.
pub const QUESTIONS_PER_DIMENSION: usize = 4;

/// One of the four life-satisfaction axes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Clarity of direction and meaning.
    Purpose,
    /// Energy and enjoyment in day-to-day life.
    Joy,
    /// Effectiveness and contribution to others.
    Impact,
    /// Rest, health and sustainable pace.
    WellBeing,
}

impl Dimension {
    /// All dimensions in canonical order. This order defines the
    /// classification code and must never be permuted.
    pub const ALL: [Dimension; 4] = [
        Dimension::Purpose,
        Dimension::Joy,
        Dimension::Impact,
        Dimension::WellBeing,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Purpose => "Purpose",
            Dimension::Joy => "Joy",
            Dimension::Impact => "Impact",
            Dimension::WellBeing => "Well-being",
        }
    }

    /// Single-letter abbreviation (P, J, I, W).
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Dimension::Purpose => 'P',
            Dimension::Joy => 'J',
            Dimension::Impact => 'I',
            Dimension::WellBeing => 'W',
        }
    }

    /// Position of this dimension in canonical order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Dimension::Purpose => 0,
            Dimension::Joy => 1,
            Dimension::Impact => 2,
            Dimension::WellBeing => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single survey question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position in the questionnaire.
    pub ordinal: u8,
    /// The dimension this question contributes to.
    pub dimension: Dimension,
    /// The statement the respondent rates.
    pub text: String,
}

impl Question {
    /// Creates a question.
    #[must_use]
    pub fn new(ordinal: u8, dimension: Dimension, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            dimension,
            text: text.into(),
        }
    }
}

/// A validated questionnaire: 16 questions with ordinals 1..=16, four per
/// dimension, stored in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTable {
    questions: Vec<Question>,
}

const STANDARD_QUESTIONS: [(Dimension, &str); QUESTION_COUNT] = [
    (
        Dimension::Purpose,
        "My daily work is clearly connected to values I care deeply about.",
    ),
    (
        Dimension::Purpose,
        "I can explain in one sentence why the work I do matters.",
    ),
    (
        Dimension::Purpose,
        "The goals I am pursuing feel like my own, not someone else's expectations.",
    ),
    (
        Dimension::Purpose,
        "When I look five years ahead, I feel a clear sense of direction.",
    ),
    (
        Dimension::Joy,
        "I regularly lose track of time because I am absorbed in what I am doing.",
    ),
    (
        Dimension::Joy,
        "Most weeks include activities I genuinely look forward to.",
    ),
    (
        Dimension::Joy,
        "My work makes room for the interests that energize me.",
    ),
    (
        Dimension::Joy,
        "I often feel curious or light-hearted during my day.",
    ),
    (
        Dimension::Impact,
        "I use my strongest skills in most of the work I do.",
    ),
    (
        Dimension::Impact,
        "I can point to concrete results my efforts produced in the last month.",
    ),
    (
        Dimension::Impact,
        "The people I work with would say I make a meaningful difference to them.",
    ),
    (
        Dimension::Impact,
        "I have enough influence to change the things I care about at work.",
    ),
    (
        Dimension::WellBeing,
        "I consistently get the rest and sleep my body needs.",
    ),
    (
        Dimension::WellBeing,
        "I have energy left at the end of the day to enjoy my personal life.",
    ),
    (
        Dimension::WellBeing,
        "I have relationships where I can be fully honest about how I am doing.",
    ),
    (
        Dimension::WellBeing,
        "My current pace of life is sustainable for the next year.",
    ),
];

static STANDARD_TABLE: LazyLock<QuestionTable> = LazyLock::new(|| {
    let questions = STANDARD_QUESTIONS
        .iter()
        .zip(1u8..)
        .map(|(&(dimension, text), ordinal)| Question::new(ordinal, dimension, text))
        .collect();
    QuestionTable::try_new(questions).expect("standard question table is well-formed")
});

impl QuestionTable {
    /// Builds a table, checking its structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuestionTable` unless the table holds
    /// exactly 16 questions with ordinals 1..=16 each used once and exactly
    /// four questions per dimension.
    pub fn try_new(mut questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.len() != QUESTION_COUNT {
            return Err(DomainError::InvalidQuestionTable(format!(
                "expected {QUESTION_COUNT} questions, found {}",
                questions.len()
            )));
        }

        questions.sort_by_key(|q| q.ordinal);
        for (expected, question) in (1u8..).zip(&questions) {
            if question.ordinal != expected {
                return Err(DomainError::InvalidQuestionTable(format!(
                    "ordinals must be 1 to {QUESTION_COUNT} without gaps or repeats, found {}",
                    question.ordinal
                )));
            }
        }

        for dimension in Dimension::ALL {
            let count = questions
                .iter()
                .filter(|q| q.dimension == dimension)
                .count();
            if count != QUESTIONS_PER_DIMENSION {
                return Err(DomainError::InvalidQuestionTable(format!(
                    "dimension {dimension} has {count} questions, expected {QUESTIONS_PER_DIMENSION}"
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The built-in Leader's Compass questionnaire.
    #[must_use]
    pub fn standard() -> &'static QuestionTable {
        &STANDARD_TABLE
    }

    /// All questions in ordinal order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by ordinal.
    #[must_use]
    pub fn get(&self, ordinal: u8) -> Option<&Question> {
        self.questions.iter().find(|q| q.ordinal == ordinal)
    }

    /// Questions belonging to `dimension`, in ordinal order.
    pub fn for_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.dimension == dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_questions() -> Vec<Question> {
        QuestionTable::standard().questions().to_vec()
    }

    #[test]
    fn test_standard_table_has_four_questions_per_dimension() {
        let table = QuestionTable::standard();

        assert_eq!(table.questions().len(), QUESTION_COUNT);
        for dimension in Dimension::ALL {
            assert_eq!(table.for_dimension(dimension).count(), 4);
        }
    }

    #[test]
    fn test_standard_table_groups_ordinals_by_dimension() {
        let table = QuestionTable::standard();

        let purpose: Vec<u8> = table
            .for_dimension(Dimension::Purpose)
            .map(|q| q.ordinal)
            .collect();
        let well_being: Vec<u8> = table
            .for_dimension(Dimension::WellBeing)
            .map(|q| q.ordinal)
            .collect();

        assert_eq!(purpose, vec![1, 2, 3, 4]);
        assert_eq!(well_being, vec![13, 14, 15, 16]);
    }

    #[test]
    fn test_try_new_sorts_by_ordinal() {
        // Arrange
        let mut questions = valid_questions();
        questions.reverse();

        // Act
        let table = QuestionTable::try_new(questions).unwrap();

        // Assert
        assert_eq!(table.questions()[0].ordinal, 1);
        assert_eq!(table.questions()[15].ordinal, 16);
    }

    #[test]
    fn test_try_new_rejects_wrong_question_count() {
        let mut questions = valid_questions();
        questions.pop();

        let result = QuestionTable::try_new(questions);

        assert!(matches!(result, Err(DomainError::InvalidQuestionTable(_))));
    }

    #[test]
    fn test_try_new_rejects_repeated_ordinal() {
        let mut questions = valid_questions();
        questions[1].ordinal = 1;

        let result = QuestionTable::try_new(questions);

        assert!(matches!(result, Err(DomainError::InvalidQuestionTable(_))));
    }

    #[test]
    fn test_try_new_rejects_unbalanced_dimensions() {
        let mut questions = valid_questions();
        questions[0].dimension = Dimension::Joy;

        let result = QuestionTable::try_new(questions);

        match result {
            Err(DomainError::InvalidQuestionTable(message)) => {
                assert!(message.contains("Purpose"), "unexpected message: {message}");
            }
            other => panic!("expected InvalidQuestionTable, got {other:?}"),
        }
    }

    #[test]
    fn test_dimension_labels_and_letters() {
        let labels: Vec<&str> = Dimension::ALL.iter().map(|d| d.label()).collect();
        let letters: String = Dimension::ALL.iter().map(|d| d.letter()).collect();

        assert_eq!(labels, vec!["Purpose", "Joy", "Impact", "Well-being"]);
        assert_eq!(letters, "PJIW");
    }
}
