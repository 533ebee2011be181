//! Page-level handlers
//!
//! Each page composes the session store, the resource clients and the demo
//! datasets. Protected pages check the session before anything else and hand
//! back [`Mount::RedirectToLogin`] without touching the network when nobody is
//! logged in. Read failures fall back to demo data; mutations on persons,
//! documents and the profile report a [`MutationOutcome`](crate::outcome::MutationOutcome).

mod add_document;
mod add_person;
mod dashboard;
mod login;
mod person_detail;
mod profile;
mod view_document;

use crate::session::{SessionGuard, SessionStore};
use crate::users::User;
use crate::DocManager;

pub use add_document::AddDocumentPage;
pub use add_person::AddPersonPage;
pub use dashboard::DashboardPage;
pub use login::{login_failure_message, LoginPage};
pub use person_detail::PersonDetailPage;
pub use profile::ProfilePage;
pub use view_document::ViewDocumentPage;

/// Everything a page handler needs
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub api: &'a DocManager,
    pub session: &'a dyn SessionStore,
}

impl<'a> PageContext<'a> {
    pub fn new(api: &'a DocManager, session: &'a dyn SessionStore) -> Self {
        Self { api, session }
    }

    /// Check the session
    pub fn guard(&self) -> SessionGuard {
        SessionGuard::check(self.session)
    }

    /// The logged-in user, or `None` when the page must redirect
    fn current_user(&self) -> Option<User> {
        match self.guard() {
            SessionGuard::Authenticated(user) => Some(user),
            SessionGuard::RedirectToLogin => None,
        }
    }
}

/// Where the UI goes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Profile,
    Person(i64),
    AddPerson,
    AddDocument(i64),
    Document(i64),
}

impl Route {
    /// Path of this route in the UI router
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Person(id) => format!("/person/{}", id),
            Route::AddPerson => "/add-person".to_string(),
            Route::AddDocument(person_id) => format!("/add-document/{}", person_id),
            Route::Document(id) => format!("/document/{}", id),
        }
    }
}

/// Result of mounting a protected page
#[derive(Debug)]
pub enum Mount<T> {
    /// The page loaded and can render
    Ready(T),
    /// No session; nothing was fetched
    RedirectToLogin,
}

impl<T> Mount<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Mount::RedirectToLogin)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Mount::Ready(page) => Some(page),
            Mount::RedirectToLogin => None,
        }
    }

    /// The route to show: `Login` on redirect, `here` otherwise
    pub fn route(&self, here: Route) -> Route {
        match self {
            Mount::Ready(_) => here,
            Mount::RedirectToLogin => Route::Login,
        }
    }
}
