use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{ProductInput, ProductView};

/// Process-local product store keyed by identity.
///
/// Implements the same port contract as the Diesel repository (mutations
/// are visible as soon as the call returns, and `update`/`delete` of an
/// absent identity are silent no-ops), so it can stand in for the relational
/// store in tests.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<HashMap<Uuid, ProductView>>,
}

impl InMemoryProductRepository {
    fn rows(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, ProductView>>, DomainError> {
        self.rows
            .lock()
            .map_err(|_| DomainError::Internal("product store mutex poisoned".to_string()))
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list_all(&self) -> Result<Vec<ProductView>, DomainError> {
        Ok(self.rows()?.values().cloned().collect())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<ProductView>, DomainError> {
        Ok(self.rows()?.get(&id).cloned())
    }

    fn insert(&self, id: Uuid, input: &ProductInput) -> Result<(), DomainError> {
        self.rows()?
            .insert(id, ProductView::from_input(id, input.clone()));
        Ok(())
    }

    fn update(&self, id: Uuid, input: &ProductInput) -> Result<(), DomainError> {
        let mut rows = self.rows()?;
        if let Some(existing) = rows.get_mut(&id) {
            *existing = ProductView::from_input(id, input.clone());
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.rows()?.remove(&id);
        Ok(())
    }
}
