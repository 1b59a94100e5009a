use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Write shape for create and update, handed down from the transport layer.
///
/// Identity is deliberately absent: it is generated on create and taken from
/// the URL path on update. Field validation happens at the transport
/// boundary, so a `ProductInput` reaching the service is already known to
/// satisfy the name and price constraints. `created_at` is resolved by the
/// transport layer ("now" when the caller omitted it) and is persisted
/// verbatim on both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

/// Read shape: identity plus every stored field.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl ProductView {
    /// View of a record that was just written with the given identity.
    pub fn from_input(id: Uuid, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            created_at: input.created_at,
        }
    }
}
