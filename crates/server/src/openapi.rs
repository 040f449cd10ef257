use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    pub message: String,
}

#[derive(ToSchema)]
pub struct TokenRequestDoc {
    pub email: String,
}

/// Unknown fields are stored with the order and echoed back on reads.
#[derive(Deserialize, ToSchema)]
pub struct NewOrderDoc {
    pub title: Option<String>,
    pub img: Option<String>,
    pub price: Option<f64>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct OrderPatchDoc {
    pub status: Option<String>,
    pub title: Option<String>,
    pub img: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
}

/// `email` in the body is ignored; the profile is always the requester's.
#[derive(ToSchema)]
pub struct ProfileUpdateDoc {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub address: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::auth::issue_token,
        crate::routes::auth::logout,
        crate::routes::catalog::list_services,
        crate::routes::catalog::service_titles,
        crate::routes::catalog::service_summaries,
        crate::routes::catalog::service_summary,
        crate::routes::catalog::get_service,
        crate::routes::catalog::list_products,
        crate::routes::catalog::get_product,
        crate::routes::orders::create,
        crate::routes::orders::list_all,
        crate::routes::orders::list_own,
        crate::routes::orders::get_one,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::users::upsert,
        crate::routes::users::list_all,
        crate::routes::users::get_one,
        crate::routes::users::admin_status,
    ),
    components(schemas(
        HealthResponse,
        MessageDoc,
        TokenRequestDoc,
        NewOrderDoc,
        OrderPatchDoc,
        ProfileUpdateDoc,
    )),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "catalog"),
        (name = "orders"),
        (name = "users")
    )
)]
pub struct ApiDoc;
