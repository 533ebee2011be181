use log::warn;

use super::{Mount, PageContext, Route};
use crate::documents::Document;
use crate::error::Error;
use crate::fallback::{demo_person, demo_person_documents, DataSource};
use crate::outcome::MutationOutcome;
use crate::persons::{Person, PersonUpdate};

/// A person and the documents attached to them
#[derive(Debug, Clone)]
pub struct PersonDetailPage {
    pub person: Person,
    pub documents: Vec<Document>,
    pub source: DataSource,
}

impl PersonDetailPage {
    /// Load a person together with their documents.
    ///
    /// Both requests run concurrently. If either fails, the page shows the demo
    /// person and the demo person's documents, never a mix.
    pub async fn mount(ctx: &PageContext<'_>, person_id: i64) -> Mount<Self> {
        if ctx.current_user().is_none() {
            return Mount::RedirectToLogin;
        }

        let (person, documents) = tokio::join!(
            ctx.api.persons().get_by_id(person_id),
            ctx.api.documents().get_by_person(person_id),
        );

        let page = match (person, documents) {
            (Ok(person), Ok(documents)) => Self {
                person,
                documents,
                source: DataSource::Remote,
            },
            (person, documents) => {
                let err = person.err().or(documents.err());
                if let Some(err) = err {
                    warn!("Loading person {} failed, showing demo data: {}", person_id, err);
                }
                Self {
                    person: demo_person(),
                    documents: demo_person_documents(),
                    source: DataSource::Demo,
                }
            }
        };

        Mount::Ready(page)
    }

    /// True when the page shows the demo person; mutations then stay local
    pub fn is_demo(&self) -> bool {
        self.source == DataSource::Demo
    }

    /// Where "Add File" leads
    pub fn add_document(&self) -> Route {
        Route::AddDocument(self.person.id)
    }

    /// Apply an edit to the person
    pub async fn update_person(
        &mut self,
        ctx: &PageContext<'_>,
        update: &PersonUpdate,
    ) -> MutationOutcome<Person> {
        if matches!(&update.name, Some(name) if name.trim().is_empty()) {
            return MutationOutcome::Rejected(Error::validation("Please enter a name"));
        }

        let outcome = if self.is_demo() {
            MutationOutcome::demo_only("Updating person", self.person.with_update(update))
        } else {
            let result = ctx.api.persons().update(self.person.id, update).await;
            MutationOutcome::optimistic(result, "Updating person", || {
                self.person.with_update(update)
            })
        };

        if let Some(person) = outcome.value() {
            self.person = person.clone();
        }
        outcome
    }

    /// Delete one of this person's documents
    pub async fn delete_document(&mut self, ctx: &PageContext<'_>, id: i64) -> MutationOutcome<()> {
        self.documents.retain(|d| d.id != id);
        if self.is_demo() {
            return MutationOutcome::demo_only("Deleting document", ());
        }
        let result = ctx.api.documents().delete(id).await;
        MutationOutcome::optimistic(result, "Deleting document", || ())
    }

    /// Delete the person; the server drops their documents too.
    ///
    /// Demo persons are never deleted on the server. Returns to the dashboard
    /// either way.
    pub async fn delete_person(self, ctx: &PageContext<'_>) -> (MutationOutcome<()>, Route) {
        if self.is_demo() {
            return (
                MutationOutcome::demo_only("Deleting person", ()),
                Route::Dashboard,
            );
        }
        let result = ctx.api.persons().delete(self.person.id).await;
        (
            MutationOutcome::optimistic(result, "Deleting person", || ()),
            Route::Dashboard,
        )
    }
}
