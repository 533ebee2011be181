use log::warn;

use super::{Mount, PageContext};
use crate::error::Error;
use crate::outcome::MutationOutcome;
use crate::session::store_user;
use crate::users::{ProfileUpdate, User};

/// The logged-in user's profile form
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub user: User,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ProfilePage {
    /// Fill the form from the stored session; no request is made
    pub fn mount(ctx: &PageContext<'_>) -> Mount<Self> {
        match ctx.current_user() {
            Some(user) => Mount::Ready(Self {
                full_name: user.full_name.clone(),
                email: user.email.clone().unwrap_or_default(),
                phone: user.phone.clone().unwrap_or_default(),
                user,
            }),
            None => Mount::RedirectToLogin,
        }
    }

    fn update(&self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.full_name.trim().to_string(),
            email: Some(self.email.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            profile_image_path: None,
        }
    }

    /// Save the profile and rewrite the session with the result.
    ///
    /// When the API call fails the edited user is written to the session
    /// anyway and the outcome is local-only.
    pub async fn save(&mut self, ctx: &PageContext<'_>) -> MutationOutcome<User> {
        if self.full_name.trim().is_empty() {
            return MutationOutcome::Rejected(Error::validation("Please enter your full name"));
        }

        let update = self.update();
        let result = ctx.api.users().update_profile(self.user.id, &update).await;
        let current = &self.user;
        let outcome =
            MutationOutcome::optimistic(result, "Updating profile", || current.with_profile(&update));

        if let Some(user) = outcome.value() {
            if let Err(err) = store_user(ctx.session, user) {
                warn!("Could not persist profile to session: {}", err);
            }
            self.user = user.clone();
        }
        outcome
    }
}
