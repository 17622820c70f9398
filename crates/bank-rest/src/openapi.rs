//! OpenAPI documentation configuration.
//!
//! Schemas and the operational endpoints come from the derive; the CRUD
//! routes are generic over the DTO type, so their paths are added per family
//! when the document is built.

use crate::controllers::health_controller::HealthResponse;
use crate::router::FamilyRoute;
use bank_core::{ErrorResponse, FieldError};
use bank_service::{
    AccountDetailsIdDto, ActualRegistrationDto, AuditDto, PassportDto, ProfileDto,
    RegistrationDto, UserDto,
};
use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItem};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, Schema};
use utoipa::openapi::{Content, ContentBuilder, Ref, RefOr, Required, Response, ResponseBuilder};
use utoipa::OpenApi;

/// OpenAPI documentation for the bank services.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bank Services API",
        version = "1.0.0",
        description = "Authorization and customer profile services"
    ),
    paths(
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            HealthResponse,
            UserDto,
            AuditDto,
            ProfileDto,
            PassportDto,
            RegistrationDto,
            ActualRegistrationDto,
            AccountDetailsIdDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "audit", description = "Audit log")
    )
)]
pub struct ApiDoc;

/// Builds the document of a service whose business routes live under
/// `context_path`.
#[must_use]
pub fn document(families: &[FamilyRoute], context_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    for family in families {
        add_family_paths(&mut doc, family, context_path);
    }

    doc.paths.paths.insert(
        format!("{}/audit/{{id}}", context_path),
        PathItem::new(
            HttpMethod::Get,
            OperationBuilder::new()
                .tag("audit")
                .summary(Some("Get an audit row by ID"))
                .parameter(id_parameter())
                .response("200", json_response("Audit row", schema_ref("AuditDto")))
                .response("404", error_response("Audit row not found"))
                .build(),
        ),
    );

    doc
}

fn add_family_paths(doc: &mut utoipa::openapi::OpenApi, family: &FamilyRoute, context_path: &str) {
    let base = format!("{}{}", context_path, family.prefix);
    let tag = family.prefix.trim_start_matches('/');
    let dto = || schema_ref(family.schema);

    doc.paths.paths.insert(
        format!("{}/create", base),
        PathItem::new(
            HttpMethod::Post,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Create a {}", tag)))
                .request_body(Some(json_body(dto())))
                .response(
                    family.create_status.as_str(),
                    json_response("Created record", dto()),
                )
                .response("400", error_response("Missing or invalid payload"))
                .build(),
        ),
    );

    doc.paths.paths.insert(
        format!("{}/read/{{id}}", base),
        PathItem::new(
            HttpMethod::Get,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Get a {} by ID", tag)))
                .parameter(id_parameter())
                .response("200", json_response("Stored record", dto()))
                .response("404", error_response("Record not found"))
                .build(),
        ),
    );

    let update = || {
        PathItem::new(
            HttpMethod::Put,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Merge fields into a {}", tag)))
                .parameter(id_parameter())
                .request_body(Some(json_body(dto())))
                .response("200", json_response("Updated record", dto()))
                .response("404", error_response("Record not found"))
                .build(),
        )
    };
    doc.paths.paths.insert(format!("{}/update/{{id}}", base), update());
    if family.id_first_update {
        doc.paths.paths.insert(format!("{}/{{id}}/update", base), update());
    }

    doc.paths.paths.insert(
        format!("{}/read/all", base),
        PathItem::new(
            HttpMethod::Get,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Get several {} records", tag)))
                .parameter(
                    ParameterBuilder::new()
                        .name("ids")
                        .parameter_in(ParameterIn::Query)
                        .required(Required::False)
                        .description(Some("Comma-separated record IDs")),
                )
                .response(
                    "200",
                    json_response(
                        "Matching records",
                        RefOr::T(Schema::Array(ArrayBuilder::new().items(dto()).build())),
                    ),
                )
                .response("400", error_response("Non-numeric ID"))
                .build(),
        ),
    );
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn json_content(schema: RefOr<Schema>) -> Content {
    ContentBuilder::new().schema(Some(schema)).build()
}

fn json_body(schema: RefOr<Schema>) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content("application/json", json_content(schema))
        .required(Some(Required::True))
        .build()
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", json_content(schema))
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, schema_ref("ErrorResponse"))
}

fn id_parameter() -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Record ID"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{AUTHORIZATION_FAMILIES, PROFILE_FAMILIES};

    #[test]
    fn test_authorization_document_paths() {
        let doc = document(&AUTHORIZATION_FAMILIES, "");
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.contains(&&"/user/create".to_string()));
        assert!(paths.contains(&&"/user/read/{id}".to_string()));
        assert!(paths.contains(&&"/user/{id}/update".to_string()));
        assert!(paths.contains(&&"/audit/{id}".to_string()));
        assert!(paths.contains(&&"/health".to_string()));
        assert!(!paths.contains(&&"/profile/create".to_string()));
    }

    #[test]
    fn test_profile_document_uses_context_path() {
        let doc = document(&PROFILE_FAMILIES, "/api");

        assert!(doc.paths.paths.contains_key("/api/account_details/read/all"));
        assert!(doc.paths.paths.contains_key("/api/actual_registration/update/{id}"));
        assert!(doc.paths.paths.contains_key("/api/audit/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
        assert!(!doc.paths.paths.contains_key("/api/passport/{id}/update"));
    }

    #[test]
    fn test_all_dto_schemas_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;
        for name in ["UserDto", "ProfileDto", "PassportDto", "AccountDetailsIdDto", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
