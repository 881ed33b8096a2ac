//! Persistence ports for the catalog domain
//!
//! These ports define the domain's requirements for data storage,
//! allowing infrastructure adapters to implement various backends.

use crate::domain::{DomainResult, aggregates::Category, value_objects::CategoryId};

/// Persistence collaborator for category aggregates.
///
/// Synchronous call-and-return contract; ordering and isolation across
/// invocations touching the same identifier are the implementer's concern.
/// `find_by_id` reports "absent" as `Ok(None)`, never as a failure, and
/// `delete_by_id` must succeed for identifiers with no stored match.
pub trait CategoryGateway: Send + Sync {
    /// Store a new aggregate, identity preserved.
    fn create(&self, category: Category) -> DomainResult<Category>;

    /// Overwrite the stored aggregate.
    fn update(&self, category: Category) -> DomainResult<Category>;

    /// Remove the stored aggregate; a no-op for unknown identifiers.
    fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()>;

    /// Load an aggregate, `Ok(None)` when no match exists.
    fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;

    /// Paginated listing with term filtering and sorting.
    fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>>;
}

/// Sort direction for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Criteria for category listing.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub page: usize,
    pub per_page: usize,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Ascending,
        }
    }
}

/// One page of results with its position in the full result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination<T> {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: usize, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Project the page items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::default();
        assert_eq!(query.page, 0);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.sort, "name");
        assert_eq!(query.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_pagination_map_keeps_metadata() {
        let page = Pagination::new(1, 2, 5, vec![1, 2]);
        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.current_page, 1);
        assert_eq!(mapped.per_page, 2);
        assert_eq!(mapped.total, 5);
        assert_eq!(mapped.items, vec![10, 20]);
    }
}
