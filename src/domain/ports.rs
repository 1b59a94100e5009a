use uuid::Uuid;

use super::errors::DomainError;
use super::product::{ProductInput, ProductView};

/// Narrow persistence port for the product collection.
///
/// Every mutating call is durable once it returns `Ok`: the backing store
/// commits each statement on its own, so there is no separate flush step and
/// read-your-writes holds trivially within a request.
///
/// `update` and `delete` are silent no-ops for an absent identity (the same
/// contract as a SQL `UPDATE`/`DELETE` affecting zero rows); the service
/// layer performs the existence check and owns the NotFound semantics.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync + 'static {
    fn list_all(&self) -> Result<Vec<ProductView>, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<ProductView>, DomainError>;
    fn insert(&self, id: Uuid, input: &ProductInput) -> Result<(), DomainError>;
    fn update(&self, id: Uuid, input: &ProductInput) -> Result<(), DomainError>;
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
