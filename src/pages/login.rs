use log::info;

use super::{PageContext, Route};
use crate::error::{Error, Result};
use crate::fallback::demo_user;
use crate::session::store_user;
use crate::users::User;

/// Login and logout
pub struct LoginPage;

impl LoginPage {
    /// Sign in and store the returned user as the session.
    ///
    /// There is no demo fallback here: a failed login leaves the session
    /// untouched and returns the error.
    pub async fn submit(ctx: &PageContext<'_>, username: &str, password: &str) -> Result<User> {
        let response = ctx.api.auth().login(username, password).await?;
        store_user(ctx.session, &response.user)?;
        Ok(response.user)
    }

    /// Store the demo account without contacting the API
    pub fn demo_login(ctx: &PageContext<'_>) -> Result<User> {
        let user = demo_user();
        store_user(ctx.session, &user)?;
        Ok(user)
    }

    /// Remove the session; the UI returns to the login page
    pub fn logout(ctx: &PageContext<'_>) -> Result<Route> {
        ctx.session.clear()?;
        info!("Logged out");
        Ok(Route::Login)
    }

    /// Where to go after a successful login
    pub fn next_route() -> Route {
        Route::Dashboard
    }
}

/// Text shown under "Login failed"
pub fn login_failure_message(err: &Error) -> String {
    match err {
        Error::Validation(msg) => msg.clone(),
        err if err.is_rejected_credentials() => "Invalid username or password.".to_string(),
        err if err.is_connectivity() => "Cannot reach the server. Check your connection.".to_string(),
        _ => "Check your credentials or server connection.".to_string(),
    }
}
