use std::path::Path;

use super::{Mount, PageContext, Route};
use crate::documents::{Document, DocumentType, NewDocument};
use crate::error::Error;
use crate::outcome::MutationOutcome;
use crate::users::User;

/// Placeholder used when no file was picked
const DEFAULT_FILE_NAME: &str = "document.pdf";

/// Form for attaching a document to a person.
///
/// Picking a file only records its name; nothing is uploaded.
#[derive(Debug, Clone)]
pub struct AddDocumentPage {
    pub user: User,
    pub person_id: i64,
    pub name: String,
    pub doc_type: DocumentType,
    pub description: String,
    pub file_name: Option<String>,
}

impl AddDocumentPage {
    pub fn mount(ctx: &PageContext<'_>, person_id: i64) -> Mount<Self> {
        match ctx.current_user() {
            Some(user) => Mount::Ready(Self {
                user,
                person_id,
                name: String::new(),
                doc_type: DocumentType::Other,
                description: String::new(),
                file_name: None,
            }),
            None => Mount::RedirectToLogin,
        }
    }

    /// Record the picked file. An empty name is filled with the file stem.
    pub fn select_file(&mut self, file_name: &str) {
        if self.name.trim().is_empty() {
            if let Some(stem) = Path::new(file_name).file_stem().and_then(|s| s.to_str()) {
                self.name = stem.to_string();
            }
        }
        self.file_name = Some(file_name.to_string());
    }

    /// Placeholder path stored with the document
    pub fn file_path(&self) -> String {
        format!(
            "/files/{}",
            self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
        )
    }

    fn request(&self) -> NewDocument {
        let mut document = NewDocument::new(
            self.name.trim(),
            self.doc_type,
            &self.file_path(),
            self.user.id,
        )
        .with_person(self.person_id);
        if !self.description.trim().is_empty() {
            document = document.with_description(self.description.trim());
        }
        document
    }

    /// Save the document. A blank name is rejected without a request.
    pub async fn submit(&self, ctx: &PageContext<'_>) -> MutationOutcome<Option<Document>> {
        if self.name.trim().is_empty() {
            return MutationOutcome::Rejected(Error::validation("Please enter a document name"));
        }

        let result = ctx.api.documents().create(&self.request()).await;
        MutationOutcome::optimistic(result.map(Some), "Saving document", || None)
    }

    /// Back to the person after saving, or stay on the form when rejected
    pub fn route_after(&self, outcome: &MutationOutcome<Option<Document>>) -> Route {
        if outcome.is_applied() {
            Route::Person(self.person_id)
        } else {
            Route::AddDocument(self.person_id)
        }
    }
}
