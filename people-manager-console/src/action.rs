//! Navigation requests
//!
//! Every menu entry carries an [`Action`] value. Paging never mutates a
//! request; it builds the next one.

use people_manager_provider::Person;

/// What to show next
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    MainScreen,
    Exit,
    List(ListRequest),
    ShowPerson { username: String },
    /// Field selection for this record
    EditPerson(Box<Person>),
    EditField {
        person: Box<Person>,
        field: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    All,
    /// `None` asks for the search term before fetching
    Search(Option<String>),
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub query: ListQuery,
    pub page: u32,
    pub page_size: u32,
}

impl ListRequest {
    pub fn all(page_size: u32) -> Self {
        Self {
            query: ListQuery::All,
            page: 1,
            page_size,
        }
    }

    pub fn search(term: Option<String>, page_size: u32) -> Self {
        Self {
            query: ListQuery::Search(term),
            page: 1,
            page_size,
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Bind the search term, keeping page and size
    #[must_use]
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            query: ListQuery::Search(Some(term.into())),
            ..self.clone()
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self.query, ListQuery::Search(_))
    }
}
