#[cfg(test)]
pub mod fixtures {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use secrecy::{ExposeSecret, SecretString};

    use crate::{
        auth::Claims,
        models::domain::{NewQuiz, Quiz, QuizQuestion, Subject, UserRole},
    };

    /// Claims for a user whose id and username are both `user_id`.
    /// Students are placed in the `cs` department, semester 3.
    pub fn claims_for(user_id: &str, role: UserRole) -> Claims {
        let (department, semester) = match role {
            UserRole::Student => (Some("cs".to_string()), Some(3)),
            _ => (None, None),
        };

        Claims {
            sub: user_id.to_string(),
            username: user_id.to_string(),
            email: format!("{}@example.edu", user_id),
            role,
            department,
            semester,
            iat: 0,
            exp: 9999999999,
        }
    }

    /// Signs `claims` the way the upstream identity provider does (HS256).
    pub fn token_for(claims: &Claims, secret: &SecretString) -> String {
        let key = EncodingKey::from_secret(secret.expose_secret().as_bytes());
        encode(&Header::default(), claims, &key).expect("claims should encode")
    }

    pub fn sample_subject(id: &str, teacher_id: &str) -> Subject {
        Subject {
            id: id.to_string(),
            name: "Discrete Mathematics".to_string(),
            code: Some("CS201".to_string()),
            teacher_id: teacher_id.to_string(),
            department_id: "cs".to_string(),
            semester: 3,
        }
    }

    /// Two questions worth 5 and 3 marks, correct options 1 and 0, open for an hour.
    pub fn sample_quiz(teacher_id: &str) -> Quiz {
        let start = Utc::now();
        Quiz::new(NewQuiz {
            title: "Propositional Logic".to_string(),
            description: Some("Truth tables".to_string()),
            subject_id: "subj-1".to_string(),
            teacher_id: teacher_id.to_string(),
            questions: vec![
                QuizQuestion::new("p AND q when p is false?", &["true", "false"], 1, 5),
                QuizQuestion::new("p OR q when p is true?", &["true", "false"], 0, 3),
            ],
            duration_minutes: 20,
            start_date: start,
            end_date: start + Duration::hours(1),
        })
        .expect("sample marks fit")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserRole;

    #[test]
    fn test_fixtures_claims_for_student_has_cohort() {
        let claims = claims_for("s1", UserRole::Student);
        assert_eq!(claims.cohort(), Some(("cs", 3)));
    }

    #[test]
    fn test_fixtures_claims_for_teacher_has_no_cohort() {
        let claims = claims_for("t1", UserRole::Teacher);
        assert!(claims.cohort().is_none());
    }

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz("t1");
        assert_eq!(quiz.total_marks, 8);
        assert_eq!(quiz.teacher_id, "t1");
        assert!(quiz.is_open_at(quiz.start_date));
    }
}
