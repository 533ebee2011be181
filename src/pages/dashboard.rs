use super::{Mount, PageContext, Route};
use crate::documents::Document;
use crate::fallback::{demo_documents, demo_persons, Loaded};
use crate::outcome::MutationOutcome;
use crate::persons::Person;
use crate::search::{filter_documents, filter_persons};
use crate::users::User;

/// The landing page after login: the user's documents and persons
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub user: User,
    pub documents: Loaded<Vec<Document>>,
    pub persons: Loaded<Vec<Person>>,
}

impl DashboardPage {
    /// Load documents and persons of the logged-in user.
    ///
    /// Both requests run concurrently and the page is built only once both
    /// have settled. Each list falls back to demo data on its own.
    pub async fn mount(ctx: &PageContext<'_>) -> Mount<Self> {
        let Some(user) = ctx.current_user() else {
            return Mount::RedirectToLogin;
        };

        let (documents, persons) = tokio::join!(
            ctx.api.documents().get_all(user.id),
            ctx.api.persons().get_all(user.id),
        );

        Mount::Ready(Self {
            documents: Loaded::or_demo(documents, "documents", demo_documents),
            persons: Loaded::or_demo(persons, "persons", demo_persons),
            user,
        })
    }

    /// "Hi, {first name}"
    pub fn greeting(&self) -> String {
        format!("Hi, {}", self.user.first_name().unwrap_or("there"))
    }

    /// "N document(s) stored"
    pub fn document_count_label(&self) -> String {
        let n = self.documents.data.len();
        format!("{} document{} stored", n, if n == 1 { "" } else { "s" })
    }

    /// Documents matching the search box
    pub fn visible_documents(&self, query: &str) -> Vec<&Document> {
        filter_documents(&self.documents.data, query)
    }

    /// Persons matching the search box
    pub fn visible_persons(&self, query: &str) -> Vec<&Person> {
        filter_persons(&self.persons.data, query)
    }

    /// Delete a document. It leaves the list whether or not the API call succeeds.
    ///
    /// Nothing is sent while the list holds demo documents.
    pub async fn delete_document(&mut self, ctx: &PageContext<'_>, id: i64) -> MutationOutcome<()> {
        self.documents.data.retain(|d| d.id != id);
        if self.documents.is_demo() {
            return MutationOutcome::demo_only("Deleting document", ());
        }
        let result = ctx.api.documents().delete(id).await;
        MutationOutcome::optimistic(result, "Deleting document", || ())
    }

    /// Open a document
    pub fn view_document(&self, id: i64) -> Route {
        Route::Document(id)
    }
}
