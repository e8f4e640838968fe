use utoipa::OpenApi;
use utoipa::ToSchema;

/// Schema of `StoreDto` as it appears on the wire.
#[derive(ToSchema)]
#[schema(rename_all = "PascalCase")]
pub struct StoreDtoDoc {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::stores::list,
        crate::routes::stores::get_by_id,
        crate::routes::stores::create,
        crate::routes::stores::update,
        crate::routes::stores::delete,
    ),
    components(schemas(StoreDtoDoc)),
    tags(
        (name = "health"),
        (name = "store")
    )
)]
pub struct ApiDoc;
