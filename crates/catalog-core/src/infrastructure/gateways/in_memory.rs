//! In-memory gateway implementation for testing and development

use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

use crate::domain::{
    Category, CategoryGateway, DomainResult, Entity, Pagination, SearchQuery, SortDirection,
    value_objects::CategoryId,
};

/// In-memory implementation of [`CategoryGateway`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryGateway {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored categories.
    pub fn category_count(&self) -> usize {
        self.categories.read().len()
    }

    /// Clear all categories (for testing).
    pub fn clear(&self) {
        self.categories.write().clear();
    }
}

impl CategoryGateway for InMemoryCategoryGateway {
    fn create(&self, category: Category) -> DomainResult<Category> {
        let mut categories = self.categories.write();
        categories.insert(category.id().clone(), category.clone());
        Ok(category)
    }

    fn update(&self, category: Category) -> DomainResult<Category> {
        let mut categories = self.categories.write();
        categories.insert(category.id().clone(), category.clone());
        Ok(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()> {
        let mut categories = self.categories.write();
        categories.remove(id);
        Ok(())
    }

    fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        let categories = self.categories.read();
        Ok(categories.get(id).cloned())
    }

    fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>> {
        let categories = self.categories.read();

        let terms = query.terms.to_lowercase();
        let mut matches: Vec<Category> = categories
            .values()
            .filter(|category| {
                terms.is_empty()
                    || category.name().to_lowercase().contains(&terms)
                    || category
                        .description()
                        .is_some_and(|description| description.to_lowercase().contains(&terms))
            })
            .cloned()
            .collect();

        match query.sort.as_str() {
            "created_at" => matches.sort_by_key(Category::created_at),
            _ => matches.sort_by(|a, b| a.name().cmp(b.name())),
        }
        if query.direction == SortDirection::Descending {
            matches.reverse();
        }

        let total = matches.len();
        let items: Vec<Category> = matches
            .into_iter()
            .skip(query.page * query.per_page)
            .take(query.per_page)
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_gateway() -> InMemoryCategoryGateway {
        let gateway = InMemoryCategoryGateway::new();
        for (name, description) in [
            ("Movies", Some("The category most watched")),
            ("Series", None),
            ("Documentaries", Some("Real stories")),
        ] {
            gateway
                .create(Category::new_category(
                    name,
                    description.map(str::to_string),
                    true,
                ))
                .unwrap();
        }
        gateway
    }

    #[test]
    fn test_create_find_and_delete_round_trip() {
        let gateway = InMemoryCategoryGateway::new();
        let category = Category::new_category("Movies", None, true);
        let id = category.id().clone();

        let stored = gateway.create(category).unwrap();
        assert_eq!(stored.id(), &id);
        assert_eq!(gateway.category_count(), 1);

        let found = gateway.find_by_id(&id).unwrap();
        assert!(found.is_some());

        gateway.delete_by_id(&id).unwrap();
        assert!(gateway.find_by_id(&id).unwrap().is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let gateway = InMemoryCategoryGateway::new();
        assert!(gateway.delete_by_id(&CategoryId::from("missing")).is_ok());
    }

    #[test]
    fn test_find_by_unknown_id_is_absent_not_a_failure() {
        let gateway = InMemoryCategoryGateway::new();
        assert!(gateway.find_by_id(&CategoryId::from("missing")).unwrap().is_none());
    }

    #[test]
    fn test_find_all_paginates() {
        let gateway = seeded_gateway();

        let first = gateway
            .find_all(&SearchQuery {
                per_page: 2,
                ..SearchQuery::default()
            })
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 3);

        let second = gateway
            .find_all(&SearchQuery {
                page: 1,
                per_page: 2,
                ..SearchQuery::default()
            })
            .unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.total, 3);
    }

    #[test]
    fn test_find_all_sorts_by_name() {
        let gateway = seeded_gateway();

        let page = gateway.find_all(&SearchQuery::default()).unwrap();
        let names: Vec<_> = page.items.iter().map(Category::name).collect();
        assert_eq!(names, vec!["Documentaries", "Movies", "Series"]);

        let reversed = gateway
            .find_all(&SearchQuery {
                direction: SortDirection::Descending,
                ..SearchQuery::default()
            })
            .unwrap();
        assert_eq!(reversed.items[0].name(), "Series");
    }

    #[test]
    fn test_find_all_filters_by_terms_in_name_or_description() {
        let gateway = seeded_gateway();

        let by_name = gateway
            .find_all(&SearchQuery {
                terms: "mov".to_string(),
                ..SearchQuery::default()
            })
            .unwrap();
        assert_eq!(by_name.total, 1);
        assert_eq!(by_name.items[0].name(), "Movies");

        let by_description = gateway
            .find_all(&SearchQuery {
                terms: "REAL".to_string(),
                ..SearchQuery::default()
            })
            .unwrap();
        assert_eq!(by_description.total, 1);
        assert_eq!(by_description.items[0].name(), "Documentaries");
    }
}
