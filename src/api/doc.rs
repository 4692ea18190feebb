use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const USER_ADMIN_TAG: &str = "User administration";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "useradmin",
        description = "Superuser-only user administration endpoints",
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::api::handlers::user_add::create_user,
        crate::api::handlers::user_delete::delete_user,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::CreateUserRequest,
        )
    ),
    tags(
        (name = USER_ADMIN_TAG, description = "Create and delete users"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basicAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("HTTP Basic authentication as the superuser"))
                        .build(),
                ),
            )
        }
    }
}
