use tracing::info;

use super::AppState;
use crate::accounts::User;
use crate::error::MeowlyError;

pub fn register(state: &AppState, email: &str, password: &str) -> Result<User, MeowlyError> {
    state.accounts().register(email, password)
}

pub fn login(state: &AppState, email: &str, password: &str) -> Result<User, MeowlyError> {
    let user = state.accounts().login(email, password)?;
    info!("User {} logged in", user.id);
    Ok(user)
}
