use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::product::{ProductInput, ProductView};
use crate::schema::products;

/// The persisted Product entity. Owned by the storage layer; everything
/// above it works with `ProductView`/`ProductInput`.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

/// Full-field overwrite for `UPDATE`. `treat_none_as_null` makes an absent
/// description clear the column instead of leaving the old value behind,
/// which is what "full replace" requires.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl NewProductRow {
    pub fn from_input(id: Uuid, input: &ProductInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price.clone(),
            created_at: input.created_at,
        }
    }
}

impl From<&ProductInput> for ProductChangeset {
    fn from(input: &ProductInput) -> Self {
        Self {
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price.clone(),
            created_at: input.created_at,
        }
    }
}

impl From<ProductRow> for ProductView {
    fn from(row: ProductRow) -> Self {
        ProductView {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            created_at: row.created_at,
        }
    }
}
