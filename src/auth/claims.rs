use serde::{Deserialize, Serialize};

use crate::models::domain::UserRole;

/// Authenticated principal carried in the access token.
///
/// Tokens are issued upstream; this service only verifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<i32>,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    /// Department and semester, present for enrolled students.
    pub fn cohort(&self) -> Option<(&str, i32)> {
        match (&self.department, self.semester) {
            (Some(department), Some(semester)) => Some((department.as_str(), semester)),
            _ => None,
        }
    }
}
