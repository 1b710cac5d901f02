#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use quizdesk_server::{
    auth::Claims,
    errors::AppResult,
    models::domain::{AttemptCompletion, NewQuiz, Quiz, QuizAttempt, QuizQuestion, Subject, UserRole},
    repositories::{QuizRepository, SubjectRepository},
    services::QuizService,
};

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, quiz: Quiz) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }

    pub async fn get(&self, id: &str) -> Option<Quiz> {
        self.quizzes.read().await.get(id).cloned()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.insert(quiz.clone()).await;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.get(id).await)
    }

    async fn find_by_subject(&self, subject_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<Quiz> = quizzes
            .values()
            .filter(|q| q.subject_id == subject_id)
            .cloned()
            .collect();
        items.sort_by_key(|q| q.start_date);
        Ok(items)
    }

    async fn find_active_by_subjects(&self, subject_ids: &[String]) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<Quiz> = quizzes
            .values()
            .filter(|q| q.is_active && subject_ids.contains(&q.subject_id))
            .cloned()
            .collect();
        items.sort_by_key(|q| q.start_date);
        Ok(items)
    }

    async fn push_attempt_if_absent(
        &self,
        quiz_id: &str,
        attempt: QuizAttempt,
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        let Some(quiz) = quizzes.get_mut(quiz_id) else {
            return Ok(false);
        };
        if quiz.attempt_for(&attempt.student_id).is_some() {
            return Ok(false);
        }
        quiz.attempts.push(attempt);
        quiz.modified_at = Some(Utc::now());
        Ok(true)
    }

    async fn complete_attempt(
        &self,
        quiz_id: &str,
        student_id: &str,
        completion: AttemptCompletion,
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        let Some(quiz) = quizzes.get_mut(quiz_id) else {
            return Ok(false);
        };
        let Some(attempt) = quiz
            .attempts
            .iter_mut()
            .find(|a| a.student_id == student_id)
        else {
            return Ok(false);
        };
        Ok(attempt.complete(completion))
    }
}

#[derive(Default)]
pub struct InMemorySubjectRepository {
    subjects: HashMap<String, Subject>,
}

impl InMemorySubjectRepository {
    pub fn with(subjects: Vec<Subject>) -> Self {
        Self {
            subjects: subjects.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>> {
        Ok(self.subjects.get(id).cloned())
    }

    async fn find_by_cohort(&self, department_id: &str, semester: i32) -> AppResult<Vec<Subject>> {
        Ok(self
            .subjects
            .values()
            .filter(|s| s.department_id == department_id && s.semester == semester)
            .cloned()
            .collect())
    }
}

pub fn subject(id: &str, teacher_id: &str, department_id: &str, semester: i32) -> Subject {
    Subject {
        id: id.to_string(),
        name: format!("Subject {}", id),
        code: None,
        teacher_id: teacher_id.to_string(),
        department_id: department_id.to_string(),
        semester,
    }
}

pub fn claims(user_id: &str, role: UserRole) -> Claims {
    let (department, semester) = match role {
        UserRole::Student => (Some("cs".to_string()), Some(3)),
        _ => (None, None),
    };

    Claims {
        sub: user_id.to_string(),
        username: format!("{} name", user_id),
        email: format!("{}@example.edu", user_id),
        role,
        department,
        semester,
        iat: 0,
        exp: 9999999999,
    }
}

/// Open quiz on `subject_id`: questions worth 5 and 3 marks, correct options 1 and 0.
pub fn open_quiz(subject_id: &str, teacher_id: &str) -> Quiz {
    let now = Utc::now();
    Quiz::new(NewQuiz {
        title: "Graph Theory".to_string(),
        description: None,
        subject_id: subject_id.to_string(),
        teacher_id: teacher_id.to_string(),
        questions: vec![
            QuizQuestion::new("Edges in K3?", &["2", "3", "4"], 1, 5),
            QuizQuestion::new("Is a tree acyclic?", &["yes", "no"], 0, 3),
        ],
        duration_minutes: 30,
        start_date: now - Duration::minutes(5),
        end_date: now + Duration::hours(1),
    })
    .expect("sample marks fit")
}

pub struct Harness {
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub service: Arc<QuizService>,
}

/// Service over in-memory storage with subject `subj-1` taught by `teacher-1`
/// for the `cs` department, semester 3.
pub fn harness() -> Harness {
    let quizzes = Arc::new(InMemoryQuizRepository::new());
    let subjects = Arc::new(InMemorySubjectRepository::with(vec![
        subject("subj-1", "teacher-1", "cs", 3),
        subject("subj-2", "teacher-2", "cs", 5),
    ]));
    let service = Arc::new(QuizService::new(quizzes.clone(), subjects));

    Harness { quizzes, service }
}
