use serde::{Deserialize, Serialize};

/// Subject directory entry. Owned by the academic catalogue; read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    pub teacher_id: String,
    pub department_id: String,
    pub semester: i32,
}

impl Subject {
    pub fn is_taught_by(&self, user_id: &str) -> bool {
        self.teacher_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_deserializes_without_code() {
        let json = r#"{
            "id": "subj-1",
            "name": "Algorithms",
            "teacher_id": "teacher-1",
            "department_id": "cs",
            "semester": 3
        }"#;

        let subject: Subject = serde_json::from_str(json).expect("subject should parse");
        assert!(subject.code.is_none());
        assert!(subject.is_taught_by("teacher-1"));
        assert!(!subject.is_taught_by("teacher-2"));
    }
}
