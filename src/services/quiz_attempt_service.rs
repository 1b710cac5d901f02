use chrono::{DateTime, Utc};

use crate::models::domain::{AttemptAnswer, AttemptCompletion, Quiz};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Sum of marks for every answer whose selected option is the correct one.
    ///
    /// Answers pointing at a question that does not exist are skipped. Each
    /// answer is scored on its own, so repeated answers for one question count
    /// once per occurrence. The score saturates at `i32::MAX`.
    pub fn grade_attempt(quiz: &Quiz, answers: &[AttemptAnswer]) -> i32 {
        answers
            .iter()
            .filter_map(|answer| {
                let index = usize::try_from(answer.question_index).ok()?;
                let question = quiz.questions.get(index)?;
                question
                    .is_answered_by(answer.selected_option)
                    .then_some(question.marks)
            })
            .fold(0i32, i32::saturating_add)
    }

    pub fn percentage(score: i32, total_marks: i32) -> f64 {
        if total_marks == 0 {
            return 0.0;
        }
        f64::from(score) * 100.0 / f64::from(total_marks)
    }

    pub fn build_completion(
        quiz: &Quiz,
        answers: Vec<AttemptAnswer>,
        submitted_at: DateTime<Utc>,
    ) -> AttemptCompletion {
        let score = Self::grade_attempt(quiz, &answers);

        AttemptCompletion {
            percentage: Self::percentage(score, quiz.total_marks),
            score,
            answers,
            submitted_at,
        }
    }
}
