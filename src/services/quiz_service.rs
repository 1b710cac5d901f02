use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    auth::{require_owner_or_admin, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{AttemptAnswer, NewQuiz, Quiz, QuizAttempt, QuizQuestion, UserRole},
        dto::{
            CreateQuizRequest, QuizResponse, QuizResultsResponse, QuizView, StudentQuizView,
            SubmitQuizResponse,
        },
    },
    repositories::{QuizRepository, SubjectRepository},
    services::quiz_attempt_service::QuizAttemptService,
};

/// Quiz lifecycle: authoring, visibility, attempts and results.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    subjects: Arc<dyn SubjectRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { quizzes, subjects }
    }

    pub async fn create_quiz(
        &self,
        claims: &Claims,
        request: CreateQuizRequest,
    ) -> AppResult<QuizView> {
        request.validate()?;

        let subject = self
            .subjects
            .find_by_id(&request.subject_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Subject with id '{}' not found", request.subject_id))
            })?;

        if !subject.is_taught_by(&claims.sub) {
            log::warn!(
                "User '{}' tried to create a quiz for subject '{}' taught by '{}'",
                claims.sub,
                subject.id,
                subject.teacher_id
            );
            return Err(AppError::Forbidden(
                "Only the subject's assigned teacher can create quizzes for it".to_string(),
            ));
        }

        if request.start_date > request.end_date {
            return Err(AppError::ValidationError(
                "startDate must not be after endDate".to_string(),
            ));
        }

        let questions: Vec<QuizQuestion> =
            request.questions.into_iter().map(QuizQuestion::from).collect();
        if let Some(index) = questions.iter().position(|q| !q.has_valid_correct_option()) {
            return Err(AppError::ValidationError(format!(
                "Question {} has a correctOption outside its options",
                index
            )));
        }

        let quiz = Quiz::new(NewQuiz {
            title: request.title,
            description: request.description,
            subject_id: subject.id,
            teacher_id: claims.sub.clone(),
            questions,
            duration_minutes: request.duration,
            start_date: request.start_date,
            end_date: request.end_date,
        })?;

        let created = self.quizzes.create(quiz).await?;
        log::info!(
            "Quiz '{}' created for subject '{}' ({} marks)",
            created.id,
            created.subject_id,
            created.total_marks
        );

        Ok(created.into())
    }

    pub async fn get_quiz(&self, claims: &Claims, id: &str) -> AppResult<QuizResponse> {
        let quiz = self.load_quiz(id).await?;

        match claims.role {
            UserRole::Student => Ok(QuizResponse::student(quiz)),
            _ => {
                require_owner_or_admin(claims, &quiz.teacher_id)?;
                Ok(QuizResponse::full(quiz))
            }
        }
    }

    pub async fn list_quizzes_for_subject(
        &self,
        claims: &Claims,
        subject_id: &str,
    ) -> AppResult<Vec<QuizResponse>> {
        self.list_quizzes_for_subject_at(claims, subject_id, Utc::now())
            .await
    }

    /// Expired quizzes are hidden for every role.
    pub async fn list_quizzes_for_subject_at(
        &self,
        claims: &Claims,
        subject_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<QuizResponse>> {
        let quizzes = self.quizzes.find_by_subject(subject_id).await?;
        let as_student = claims.role == UserRole::Student;

        Ok(quizzes
            .into_iter()
            .filter(|quiz| !quiz.is_expired_at(now))
            .map(|quiz| {
                if as_student {
                    QuizResponse::student(quiz)
                } else {
                    QuizResponse::full(quiz)
                }
            })
            .collect())
    }

    /// Active quizzes of every subject in the student's department and semester.
    pub async fn list_quizzes_for_student(
        &self,
        claims: &Claims,
    ) -> AppResult<Vec<StudentQuizView>> {
        let (department, semester) = claims.cohort().ok_or_else(|| {
            AppError::ValidationError(
                "Student profile has no department or semester".to_string(),
            )
        })?;

        let subject_ids: Vec<String> = self
            .subjects
            .find_by_cohort(department, semester)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let quizzes = self.quizzes.find_active_by_subjects(&subject_ids).await?;

        Ok(quizzes
            .into_iter()
            .filter(|quiz| quiz.is_active)
            .map(StudentQuizView::from)
            .collect())
    }

    pub async fn start_quiz(&self, claims: &Claims, id: &str) -> AppResult<StudentQuizView> {
        self.start_quiz_at(claims, id, Utc::now()).await
    }

    pub async fn start_quiz_at(
        &self,
        claims: &Claims,
        id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<StudentQuizView> {
        let quiz = self.load_quiz(id).await?;

        if !quiz.is_active || !quiz.is_open_at(now) {
            return Err(AppError::QuizNotAvailable(format!(
                "Quiz '{}' can only be started between {} and {}",
                quiz.id, quiz.start_date, quiz.end_date
            )));
        }

        if quiz.attempt_for(&claims.sub).is_some() {
            return Err(Self::already_attempted(&quiz.id));
        }

        let attempt = QuizAttempt::start(&claims.sub, &claims.username, now);
        let appended = self.quizzes.push_attempt_if_absent(&quiz.id, attempt).await?;
        if !appended {
            log::warn!(
                "Concurrent start rejected for student '{}' on quiz '{}'",
                claims.sub,
                quiz.id
            );
            return Err(Self::already_attempted(&quiz.id));
        }

        log::info!("Student '{}' started quiz '{}'", claims.sub, quiz.id);
        Ok(quiz.into())
    }

    /// Scores and completes the student's in-progress attempt.
    ///
    /// Submission time is not checked against the availability window or the
    /// quiz duration; only starting is time-gated.
    pub async fn submit_quiz(
        &self,
        claims: &Claims,
        id: &str,
        answers: Vec<AttemptAnswer>,
    ) -> AppResult<SubmitQuizResponse> {
        let quiz = self.load_quiz(id).await?;

        let in_progress = quiz
            .attempt_for(&claims.sub)
            .map(|a| a.is_in_progress())
            .unwrap_or(false);
        if !in_progress {
            return Err(Self::no_active_attempt(&quiz.id));
        }

        let completion = QuizAttemptService::build_completion(&quiz, answers, Utc::now());
        let response = SubmitQuizResponse {
            score: completion.score,
            total_marks: quiz.total_marks,
            percentage: completion.percentage,
        };

        let completed = self
            .quizzes
            .complete_attempt(&quiz.id, &claims.sub, completion)
            .await?;
        if !completed {
            return Err(Self::no_active_attempt(&quiz.id));
        }

        log::info!(
            "Student '{}' submitted quiz '{}' scoring {}/{}",
            claims.sub,
            quiz.id,
            response.score,
            response.total_marks
        );
        Ok(response)
    }

    pub async fn get_quiz_results(
        &self,
        claims: &Claims,
        id: &str,
    ) -> AppResult<QuizResultsResponse> {
        let quiz = self.load_quiz(id).await?;
        require_owner_or_admin(claims, &quiz.teacher_id)?;

        Ok(QuizResultsResponse::from(&quiz))
    }

    async fn load_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    fn already_attempted(quiz_id: &str) -> AppError {
        AppError::AlreadyAttempted(format!("Quiz '{}' has already been attempted", quiz_id))
    }

    fn no_active_attempt(quiz_id: &str) -> AppError {
        AppError::NoActiveAttempt(format!("No in-progress attempt for quiz '{}'", quiz_id))
    }
}
