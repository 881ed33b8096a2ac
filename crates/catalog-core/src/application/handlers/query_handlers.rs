//! Read-path use cases: get by id and paginated listing

use crate::{
    application::dto::{CategoryListOutput, CategoryOutput},
    domain::{
        CategoryGateway, DomainError, DomainResult, Pagination, SearchQuery,
        value_objects::CategoryId,
    },
};
use std::sync::Arc;
use tracing::debug;

/// Get use case: load by id or raise a not-found failure. No validation
/// stage; gateway failures propagate to the caller unchanged.
#[derive(Debug)]
pub struct GetCategoryByIdUseCase<G> {
    gateway: Arc<G>,
}

impl<G> GetCategoryByIdUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, id: &str) -> DomainResult<CategoryOutput> {
        let id = CategoryId::from(id);

        let category = self
            .gateway
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(&id))?;

        Ok(CategoryOutput::from(&category))
    }
}

/// List use case: delegate to the gateway and project each page item.
#[derive(Debug)]
pub struct ListCategoriesUseCase<G> {
    gateway: Arc<G>,
}

impl<G> ListCategoriesUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, query: &SearchQuery) -> DomainResult<Pagination<CategoryListOutput>> {
        let page = self.gateway.find_all(query)?;
        debug!(
            page = query.page,
            total = page.total,
            "categories listed"
        );
        Ok(page.map(|category| CategoryListOutput::from(&category)))
    }
}
