use super::{Mount, PageContext, Route};
use crate::outcome::MutationOutcome;
use crate::persons::{NewPerson, Person};
use crate::users::User;

/// Form for a new person
#[derive(Debug, Clone)]
pub struct AddPersonPage {
    pub user: User,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl AddPersonPage {
    pub fn mount(ctx: &PageContext<'_>) -> Mount<Self> {
        match ctx.current_user() {
            Some(user) => Mount::Ready(Self {
                user,
                name: String::new(),
                phone: String::new(),
                address: String::new(),
            }),
            None => Mount::RedirectToLogin,
        }
    }

    fn request(&self) -> NewPerson {
        let mut person = NewPerson::new(self.name.trim(), self.user.id);
        if !self.phone.trim().is_empty() {
            person = person.with_phone(self.phone.trim());
        }
        if !self.address.trim().is_empty() {
            person = person.with_address(self.address.trim());
        }
        person
    }

    /// Create the person.
    ///
    /// A confirmed create carries the stored person. A local-only create carries
    /// `None` because ids only come from the server.
    pub async fn submit(&self, ctx: &PageContext<'_>) -> MutationOutcome<Option<Person>> {
        let result = ctx.api.persons().create(&self.request()).await;
        MutationOutcome::optimistic(result.map(Some), "Creating person", || None)
    }

    /// Where to go after submitting
    pub fn route_after(outcome: &MutationOutcome<Option<Person>>) -> Route {
        match outcome {
            MutationOutcome::Applied(Some(person)) => Route::Person(person.id),
            MutationOutcome::Rejected(_) => Route::AddPerson,
            _ => Route::Dashboard,
        }
    }
}
