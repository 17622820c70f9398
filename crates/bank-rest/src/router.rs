//! Application routers of the two services.

use crate::{
    controllers::{audit_controller, crud_controller, health_controller},
    middleware::{logging_middleware, REQUEST_ID_HEADER},
    openapi,
    state::AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, StatusCode},
    middleware, Router,
};
use bank_config::{ServerConfig, ServiceKind};
use bank_service::{AuthorizationServices, ProfileServices};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa_swagger_ui::SwaggerUi;

/// One record family's route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyRoute {
    /// Path prefix of the family's routes.
    pub prefix: &'static str,
    /// Name of the family's DTO schema in the OpenAPI document.
    pub schema: &'static str,
    /// Status of a successful create.
    pub create_status: StatusCode,
    /// Also serve `PUT {prefix}/:id/update` next to `PUT {prefix}/update/:id`.
    pub id_first_update: bool,
}

/// Families served by the authorization service.
pub const AUTHORIZATION_FAMILIES: [FamilyRoute; 1] = [FamilyRoute {
    prefix: "/user",
    schema: "UserDto",
    create_status: StatusCode::CREATED,
    id_first_update: true,
}];

/// Families served by the profile service.
pub const PROFILE_FAMILIES: [FamilyRoute; 5] = [
    FamilyRoute {
        prefix: "/profile",
        schema: "ProfileDto",
        create_status: StatusCode::OK,
        id_first_update: false,
    },
    FamilyRoute {
        prefix: "/passport",
        schema: "PassportDto",
        create_status: StatusCode::OK,
        id_first_update: false,
    },
    FamilyRoute {
        prefix: "/registration",
        schema: "RegistrationDto",
        create_status: StatusCode::OK,
        id_first_update: false,
    },
    FamilyRoute {
        prefix: "/actual_registration",
        schema: "ActualRegistrationDto",
        create_status: StatusCode::OK,
        id_first_update: false,
    },
    FamilyRoute {
        prefix: "/account_details",
        schema: "AccountDetailsIdDto",
        create_status: StatusCode::OK,
        id_first_update: false,
    },
];

/// Returns the route groups of a service.
#[must_use]
pub fn families(service: ServiceKind) -> &'static [FamilyRoute] {
    match service {
        ServiceKind::Authorization => &AUTHORIZATION_FAMILIES,
        ServiceKind::Profile => &PROFILE_FAMILIES,
    }
}

/// Creates the router of the authorization service.
pub fn authorization_router(
    services: &AuthorizationServices,
    state: AppState,
    server_config: &ServerConfig,
) -> Router {
    let [user] = AUTHORIZATION_FAMILIES;

    let api = Router::new()
        .nest(
            user.prefix,
            crud_controller::router(services.users.clone(), &user),
        )
        .nest("/audit", audit_controller::router(services.audit.clone()));

    finish(api, state, server_config)
}

/// Creates the router of the profile service.
pub fn profile_router(
    services: &ProfileServices,
    state: AppState,
    server_config: &ServerConfig,
) -> Router {
    let [profile, passport, registration, actual_registration, account_details] = PROFILE_FAMILIES;

    let api = Router::new()
        .nest(
            profile.prefix,
            crud_controller::router(services.profiles.clone(), &profile),
        )
        .nest(
            passport.prefix,
            crud_controller::router(services.passports.clone(), &passport),
        )
        .nest(
            registration.prefix,
            crud_controller::router(services.registrations.clone(), &registration),
        )
        .nest(
            actual_registration.prefix,
            crud_controller::router(services.actual_registrations.clone(), &actual_registration),
        )
        .nest(
            account_details.prefix,
            crud_controller::router(services.account_details.clone(), &account_details),
        )
        .nest("/audit", audit_controller::router(services.audit.clone()));

    finish(api, state, server_config)
}

/// Mounts the business routes under the context path and adds the
/// operational endpoints and middleware layers.
fn finish(api: Router, state: AppState, server_config: &ServerConfig) -> Router {
    let service = state.service;
    let context_path = server_config.normalized_context_path();
    let doc = openapi::document(families(service), &context_path);

    let api = if context_path.is_empty() {
        api
    } else {
        Router::new().nest(&context_path, api)
    };

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let router = Router::new()
        .merge(health_controller::router(state))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(server_config.max_body_size))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(create_cors_layer(server_config))
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid));

    info!(
        "{} router created under '{}' with Swagger UI at /swagger-ui",
        service,
        if context_path.is_empty() { "/" } else { &context_path }
    );
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }
    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
}
