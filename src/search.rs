//! Case-insensitive filtering of already loaded lists

use crate::documents::Document;
use crate::persons::Person;

fn normalize(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.map_or(false, |value| value.to_lowercase().contains(needle))
}

/// Persons whose name or phone contains `query`. A blank query keeps everything.
pub fn filter_persons<'a>(persons: &'a [Person], query: &str) -> Vec<&'a Person> {
    match normalize(query) {
        None => persons.iter().collect(),
        Some(needle) => persons
            .iter()
            .filter(|p| contains(Some(p.name.as_str()), &needle) || contains(p.phone.as_deref(), &needle))
            .collect(),
    }
}

/// Documents whose name or description contains `query`. A blank query keeps everything.
pub fn filter_documents<'a>(documents: &'a [Document], query: &str) -> Vec<&'a Document> {
    match normalize(query) {
        None => documents.iter().collect(),
        Some(needle) => documents
            .iter()
            .filter(|d| {
                contains(Some(d.name.as_str()), &needle) || contains(d.description.as_deref(), &needle)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{demo_documents, demo_persons};

    #[test]
    fn test_person_name_is_case_insensitive() {
        let persons = demo_persons();
        let found = filter_persons(&persons, "priya");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Priya Patel");

        let found = filter_persons(&persons, "SHARMA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Rahul Sharma");
    }

    #[test]
    fn test_person_phone_substring() {
        let persons = demo_persons();
        let found = filter_persons(&persons, "98765");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_blank_query_keeps_all() {
        let persons = demo_persons();
        assert_eq!(filter_persons(&persons, "   ").len(), persons.len());

        let documents = demo_documents();
        assert_eq!(filter_documents(&documents, "").len(), documents.len());
    }

    #[test]
    fn test_document_description_matches() {
        let documents = demo_documents();
        let found = filter_documents(&documents, "sbi");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bank Passbook");
    }

    #[test]
    fn test_no_match() {
        let documents = demo_documents();
        assert!(filter_documents(&documents, "driving licence").is_empty());
    }
}
