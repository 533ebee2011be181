use super::{Mount, PageContext, Route};
use crate::documents::{Document, DocumentType, DocumentUpdate};
use crate::error::Error;
use crate::fallback::{demo_document, Loaded};
use crate::outcome::MutationOutcome;

/// A single document with an inline edit form
#[derive(Debug, Clone)]
pub struct ViewDocumentPage {
    pub document: Loaded<Document>,
    pub editing: bool,
    pub name: String,
    pub doc_type: DocumentType,
    pub description: String,
}

impl ViewDocumentPage {
    pub async fn mount(ctx: &PageContext<'_>, id: i64) -> Mount<Self> {
        if ctx.current_user().is_none() {
            return Mount::RedirectToLogin;
        }

        let document = Loaded::or_demo(
            ctx.api.documents().get_by_id(id).await,
            "document",
            demo_document,
        );

        let mut page = Self {
            document,
            editing: false,
            name: String::new(),
            doc_type: DocumentType::Other,
            description: String::new(),
        };
        page.reset_form();
        Mount::Ready(page)
    }

    /// Copy the shown document into the form fields
    pub fn reset_form(&mut self) {
        let doc = &self.document.data;
        self.name = doc.name.clone();
        self.doc_type = doc.doc_type;
        self.description = doc.description.clone().unwrap_or_default();
    }

    pub fn start_editing(&mut self) {
        self.reset_form();
        self.editing = true;
    }

    pub fn cancel_editing(&mut self) {
        self.reset_form();
        self.editing = false;
    }

    /// Label of the shown document's type
    pub fn type_label(&self) -> &'static str {
        self.document.data.type_label()
    }

    /// Save the form. On API failure, or while a demo document is shown, the
    /// edit is kept locally.
    pub async fn save(&mut self, ctx: &PageContext<'_>) -> MutationOutcome<Document> {
        if self.name.trim().is_empty() {
            return MutationOutcome::Rejected(Error::validation("Please enter a document name"));
        }

        let update = DocumentUpdate {
            name: Some(self.name.trim().to_string()),
            doc_type: Some(self.doc_type),
            description: Some(self.description.clone()),
        };

        let outcome = if self.document.is_demo() {
            MutationOutcome::demo_only("Updating document", self.document.data.with_update(&update))
        } else {
            let result = ctx.api.documents().update(self.document.data.id, &update).await;
            let current = &self.document.data;
            MutationOutcome::optimistic(result, "Updating document", || current.with_update(&update))
        };

        if let Some(doc) = outcome.value() {
            self.document.data = doc.clone();
        }
        self.editing = false;
        outcome
    }

    /// Delete the document and return to the dashboard
    pub async fn delete(self, ctx: &PageContext<'_>) -> (MutationOutcome<()>, Route) {
        if self.document.is_demo() {
            return (
                MutationOutcome::demo_only("Deleting document", ()),
                Route::Dashboard,
            );
        }
        let result = ctx.api.documents().delete(self.document.data.id).await;
        (
            MutationOutcome::optimistic(result, "Deleting document", || ()),
            Route::Dashboard,
        )
    }
}
