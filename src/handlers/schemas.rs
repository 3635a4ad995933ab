/// Record-shape catalog for the external database viewer
use actix_web::HttpResponse;

use crate::models::SchemaCatalogResponse;
use crate::schema;

/// Serve the full schema catalog. The admin viewer reads this to generate
/// its CRUD UI and to validate documents it writes on our behalf.
pub async fn list_schemas() -> HttpResponse {
    HttpResponse::Ok().json(SchemaCatalogResponse {
        schemas: schema::catalog(),
    })
}
