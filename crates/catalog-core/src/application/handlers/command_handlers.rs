//! Write-path use cases: create, update and soft-delete

use crate::{
    application::{
        commands::{CreateCategoryCommand, UpdateCategoryCommand},
        dto::{CreateCategoryOutput, UpdateCategoryOutput},
    },
    domain::{
        Category, CategoryGateway, DomainError, DomainResult, Entity, Notification,
        ValidationHandler, value_objects::CategoryId,
    },
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Create use case: materialize, validate through a fresh notification,
/// then persist. Validation failures and gateway failures both come back
/// as a non-empty [`Notification`]; nothing is raised on this path.
#[derive(Debug)]
pub struct CreateCategoryUseCase<G> {
    gateway: Arc<G>,
}

impl<G> CreateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CreateCategoryOutput, Notification> {
        let category =
            Category::new_category(command.name, command.description, command.is_active);

        let mut notification = Notification::new();
        if let Err(failure) = category.validate(&mut notification) {
            return Err(Notification::from_failure(&failure));
        }
        if notification.has_error() {
            return Err(notification);
        }

        self.create(category)
    }

    fn create(&self, category: Category) -> Result<CreateCategoryOutput, Notification> {
        match self.gateway.create(category) {
            Ok(stored) => {
                debug!(category_id = %stored.id(), "category created");
                Ok(CreateCategoryOutput::from(&stored))
            }
            Err(failure) => {
                warn!(error = %failure, "category gateway failed during create");
                Err(Notification::from_error(crate::domain::Error::new(
                    failure.to_string(),
                )))
            }
        }
    }
}

/// Update use case.
///
/// Two failure channels compose in the return type: the outer `Err` is the
/// raised not-found abort (and any gateway failure while loading), the
/// inner `Err` is the accumulated validation or normalized persist failure.
#[derive(Debug)]
pub struct UpdateCategoryUseCase<G> {
    gateway: Arc<G>,
}

impl<G> UpdateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> DomainResult<Result<UpdateCategoryOutput, Notification>> {
        let id = CategoryId::from(command.id);

        let mut category = self
            .gateway
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(&id))?;

        category.update(command.name, command.description, command.is_active);

        let mut notification = Notification::new();
        if let Err(failure) = category.validate(&mut notification) {
            return Ok(Err(Notification::from_failure(&failure)));
        }
        if notification.has_error() {
            return Ok(Err(notification));
        }

        Ok(self.update(category))
    }

    fn update(&self, category: Category) -> Result<UpdateCategoryOutput, Notification> {
        match self.gateway.update(category) {
            Ok(stored) => {
                debug!(category_id = %stored.id(), "category updated");
                Ok(UpdateCategoryOutput::from(&stored))
            }
            Err(failure) => {
                warn!(error = %failure, "category gateway failed during update");
                Err(Notification::from_error(crate::domain::Error::new(
                    failure.to_string(),
                )))
            }
        }
    }
}

/// Delete use case: idempotent, no validation stage. Gateway failures
/// propagate to the caller unchanged.
#[derive(Debug)]
pub struct DeleteCategoryUseCase<G> {
    gateway: Arc<G>,
}

impl<G> DeleteCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, id: &str) -> DomainResult<()> {
        let id = CategoryId::from(id);
        self.gateway.delete_by_id(&id)?;
        debug!(category_id = %id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Pagination, SearchQuery};

    /// Gateway stub whose every operation fails the same way.
    struct BrokenGateway;

    impl CategoryGateway for BrokenGateway {
        fn create(&self, _category: Category) -> DomainResult<Category> {
            Err(DomainError::gateway("Gateway error"))
        }

        fn update(&self, _category: Category) -> DomainResult<Category> {
            Err(DomainError::gateway("Gateway error"))
        }

        fn delete_by_id(&self, _id: &CategoryId) -> DomainResult<()> {
            Err(DomainError::gateway("Gateway error"))
        }

        fn find_by_id(&self, _id: &CategoryId) -> DomainResult<Option<Category>> {
            Err(DomainError::gateway("Gateway error"))
        }

        fn find_all(&self, _query: &SearchQuery) -> DomainResult<Pagination<Category>> {
            Err(DomainError::gateway("Gateway error"))
        }
    }

    #[test]
    fn test_create_normalizes_gateway_failure_into_notification() {
        let use_case = CreateCategoryUseCase::new(Arc::new(BrokenGateway));

        let notification = use_case
            .execute(CreateCategoryCommand::with("Movies", None, true))
            .unwrap_err();

        assert_eq!(notification.errors().len(), 1);
        assert_eq!(notification.first_error().unwrap().message(), "Gateway error");
    }

    #[test]
    fn test_update_load_failure_propagates_raw() {
        let use_case = UpdateCategoryUseCase::new(Arc::new(BrokenGateway));

        let failure = use_case
            .execute(UpdateCategoryCommand::with("123", "Movies", None, true))
            .unwrap_err();

        assert_eq!(failure, DomainError::gateway("Gateway error"));
    }

    #[test]
    fn test_delete_failure_propagates_raw() {
        let use_case = DeleteCategoryUseCase::new(Arc::new(BrokenGateway));

        let failure = use_case.execute("123").unwrap_err();

        assert_eq!(failure, DomainError::gateway("Gateway error"));
    }
}
