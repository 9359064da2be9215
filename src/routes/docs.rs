//! OpenAPI document for the customer API, served as JSON, plus a Swagger UI page over it.

use crate::handlers::customer;
use crate::model::{
    CustomerDto, CustomerInsertRequest, CustomerPatchUpdateRequest, CustomerPutUpdateRequest,
};
use crate::response::ProblemDetail;
use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Customer API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: '{openapi}',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;

#[derive(OpenApi)]
#[openapi(
    paths(
        customer::list,
        customer::read,
        customer::create,
        customer::put,
        customer::patch,
        customer::delete,
    ),
    components(schemas(
        CustomerDto,
        CustomerInsertRequest,
        CustomerPutUpdateRequest,
        CustomerPatchUpdateRequest,
        ProblemDetail,
    )),
    tags((name = "customer", description = "고객 API"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<String> {
    Html(SWAGGER_UI_HTML.replace("{openapi}", OPENAPI_PATH))
}

/// GET /api-docs/openapi.json and GET /swagger-ui.
pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi))
        .route(SWAGGER_UI_PATH, get(swagger_ui))
}
