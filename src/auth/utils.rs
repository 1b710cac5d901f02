use async_graphql::Context;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

pub const ANY_ROLE: &[UserRole] = &[UserRole::Admin, UserRole::Teacher, UserRole::Student];

/// The single capability check every handler and resolver runs before the engine.
pub fn require_role(claims: &Claims, allowed: &[UserRole]) -> AppResult<()> {
    if allowed.contains(&claims.role) {
        return Ok(());
    }

    let allowed = allowed
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Err(AppError::Forbidden(format!(
        "Role '{}' cannot perform this action (requires one of: {})",
        claims.role, allowed
    )))
}

pub fn require_owner_or_admin(claims: &Claims, resource_owner: &str) -> AppResult<()> {
    if claims.role != UserRole::Admin && claims.sub != resource_owner {
        return Err(AppError::Forbidden(
            "Only the owning teacher or an admin can access this resource".to_string(),
        ));
    }
    Ok(())
}

pub fn extract_claims_from_context(ctx: &Context<'_>) -> AppResult<Claims> {
    ctx.data::<Claims>()
        .cloned()
        .map_err(|_| AppError::Unauthorized("Authentication required".to_string()))
}
