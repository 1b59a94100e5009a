use actix_web::http::header;
use actix_web::{web, HttpResponse, Scope};
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::application::product_service::ProductService;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{ProductInput, ProductView};
use crate::errors::{AppError, FieldError};

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Product payload accepted by POST and PUT. Any client-supplied `id` is
/// ignored; identity comes from the path (PUT) or is generated (POST).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,
    /// Timestamp to store; the current time is used when omitted.
    pub created_at: Option<DateTime<Utc>>,
}

impl ProductRequest {
    fn into_input(self) -> Result<ProductInput, AppError> {
        // Going through the f64's shortest decimal representation keeps
        // 9.99 as exactly 9.99 rather than its binary expansion.
        let price = BigDecimal::from_str(&self.price.to_string())
            .map_err(|e| AppError::Internal(format!("Invalid price '{}': {}", self.price, e)))?;
        Ok(ProductInput {
            name: self.name,
            description: self.description,
            price,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<ProductView> for ProductResponse {
    fn from(p: ProductView) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price.to_f64().unwrap_or_default(),
            created_at: p.created_at,
        }
    }
}

// ── OpenAPI document ─────────────────────────────────────────────────────────

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(schemas(ProductRequest, ProductResponse, FieldError)),
    tags(
        (name = "products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// All product routes under `/api/product`, generic over the repository so
/// tests can mount the same handlers on an in-memory store.
pub fn scope<R: ProductRepository>() -> Scope {
    web::scope("/api/product")
        .route("", web::get().to(list_products::<R>))
        .route("", web::post().to(create_product::<R>))
        .route("/{id}", web::get().to(get_product::<R>))
        .route("/{id}", web::put().to(update_product::<R>))
        .route("/{id}", web::delete().to(delete_product::<R>))
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/product
///
/// Returns every product in the store.
#[utoipa::path(
    get,
    path = "/api/product",
    responses(
        (status = 200, description = "All products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products<R: ProductRepository>(
    service: web::Data<ProductService<R>>,
) -> Result<HttpResponse, AppError> {
    let products = web::block(move || service.get_all())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/product/{id}
#[utoipa::path(
    get,
    path = "/api/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn get_product<R: ProductRepository>(
    service: web::Data<ProductService<R>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let product = web::block(move || service.get_by_id(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// POST /api/product
///
/// Stores a new product under a generated id and returns it, with a
/// Location header pointing at the new resource.
#[utoipa::path(
    post,
    path = "/api/product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product<R: ProductRepository>(
    service: web::Data<ProductService<R>>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    body.validate()?;
    let input = body.into_input()?;

    let created = web::block(move || service.create(input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let location = format!("/api/product/{}", created.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ProductResponse::from(created)))
}

/// PUT /api/product/{id}
///
/// Full replace of an existing product: every stored field takes the value
/// from the body, `createdAt` included. When the body omits `createdAt` the
/// stored timestamp is overwritten with the current time.
#[utoipa::path(
    put,
    path = "/api/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    request_body = ProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn update_product<R: ProductRepository>(
    service: web::Data<ProductService<R>>,
    path: web::Path<Uuid>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();
    body.validate()?;
    let input = body.into_input()?;

    web::block(move || service.update(id, input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/product/{id}
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn delete_product<R: ProductRepository>(
    service: web::Data<ProductService<R>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.delete(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}
