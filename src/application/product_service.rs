use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{ProductInput, ProductView};

/// Domain entry point for the Product resource.
///
/// Owns the NotFound semantics and identity generation; everything else is
/// delegated to the storage port. Input validation happens upstream at the
/// transport boundary, so inputs arriving here already satisfy the name and
/// price constraints.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The full collection, in whatever order the store returns it. An empty
    /// store yields an empty vec, not an error.
    pub fn get_all(&self) -> Result<Vec<ProductView>, DomainError> {
        self.repo.list_all()
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<ProductView, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    /// Assigns a fresh identity and persists the input as a new record.
    pub fn create(&self, input: ProductInput) -> Result<ProductView, DomainError> {
        let id = Uuid::new_v4();
        self.repo.insert(id, &input)?;
        Ok(ProductView::from_input(id, input))
    }

    /// Full replace: every stored field, `created_at` included, takes the
    /// value from `input`. Fails with NotFound, before any mutation, when the
    /// identity is unknown.
    pub fn update(&self, id: Uuid, input: ProductInput) -> Result<(), DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        self.repo.update(id, &input)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        self.repo.delete(id)
    }
}
