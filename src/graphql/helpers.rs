use async_graphql::Context;

use crate::{
    app_state::AppState,
    auth::{extract_claims_from_context, require_role, Claims},
    errors::AppResult,
    models::domain::UserRole,
};

/// Resolves the app state and the caller's claims, enforcing `roles`.
pub fn authorize(ctx: &Context<'_>, roles: &[UserRole]) -> AppResult<(AppState, Claims)> {
    let state = ctx.data::<AppState>()?.clone();
    let claims = extract_claims_from_context(ctx)?;
    require_role(&claims, roles)?;
    Ok((state, claims))
}
