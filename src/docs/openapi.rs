//! # OpenAPI Specification Assembly
//!
//! Component schemas and tags are declared with utoipa derive macros.
//! Paths are generated from the route table by [`RouteTableAddon`], so
//! every mounted route is documented and nothing else is.

use axum::http::StatusCode;
use utoipa::openapi::path::{
    Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, Schema, Type};
use utoipa::openapi::server::ServerBuilder;
use utoipa::openapi::{
    ContentBuilder, Ref, RefOr, Required, Response, ResponseBuilder,
};
use utoipa::{Modify, OpenApi};

use crate::config::DocsConfig;
use crate::docs::schemas::{Address, Cart, CartProduct, Geolocation, Product, User, UserName};
use crate::http::payload::{ErrorResponse, LoginRequest, LoginResponse};
use crate::routing::{
    BodyRule, ForwardRoute, ParamKind, PathParam, Payload, QueryParam, ROUTES,
};

const JSON: &str = "application/json";

/// Adds one operation per route table entry.
struct RouteTableAddon;

impl Modify for RouteTableAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for route in ROUTES {
            openapi.paths.add_path_operation(
                route.path,
                vec![route.verb.http_method()],
                operation(route),
            );
        }
    }
}

/// Assembled OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FakeStore API",
        description = "Pass-through gateway to the FakeStore REST API: products, users, carts and authentication."
    ),
    components(schemas(
        Product,
        User,
        UserName,
        Address,
        Geolocation,
        Cart,
        CartProduct,
        LoginRequest,
        LoginResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Users", description = "User management endpoints"),
        (name = "Carts", description = "Shopping cart management endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
    ),
    modifiers(&RouteTableAddon)
)]
pub struct ApiDoc;

/// Build the document advertised for `config`.
pub fn openapi(config: &DocsConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![ServerBuilder::new()
        .url(config.server_url.clone())
        .description(Some("Gateway API"))
        .build()]);
    doc
}

fn operation(route: &ForwardRoute) -> Operation {
    let mut builder = OperationBuilder::new()
        .operation_id(Some(route.operation_id))
        .summary(Some(route.doc.summary))
        .tag(route.resource.tag());

    if let Some(param) = route.param {
        builder = builder.parameter(path_parameter(param));
    }
    for rule in route.query {
        for param in rule.params() {
            builder = builder.parameter(query_parameter(param));
        }
    }
    if let Some(payload) = route.doc.request {
        builder = builder.request_body(Some(request_body(payload)));
    }

    let success_status = route.fixed_success_status().unwrap_or(StatusCode::OK);
    builder = builder.response(
        success_status.as_u16().to_string(),
        json_response(route.doc.response_description, route.doc.response),
    );
    if let Some(description) = route.doc.not_found {
        builder = builder.response(
            "404",
            ResponseBuilder::new().description(description).build(),
        );
    }
    if route.body == BodyRule::Credentials {
        builder = builder.response(
            "400",
            json_response("Username or password missing", Some(Payload::One("ErrorResponse"))),
        );
    }
    builder = builder.response(
        route.failure.status().as_u16().to_string(),
        json_response("Upstream call failed", Some(Payload::One("ErrorResponse"))),
    );

    builder.build()
}

fn path_parameter(param: PathParam) -> Parameter {
    ParameterBuilder::new()
        .name(param.name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(param.description))
        .schema(Some(param_schema(ParamKind::Integer)))
        .build()
}

fn query_parameter(param: QueryParam) -> Parameter {
    ParameterBuilder::new()
        .name(param.name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some(param.description))
        .schema(Some(param_schema(param.kind)))
        .build()
}

fn param_schema(kind: ParamKind) -> Schema {
    let object = match kind {
        ParamKind::Integer => ObjectBuilder::new().schema_type(Type::Integer),
        ParamKind::Text => ObjectBuilder::new().schema_type(Type::String),
        ParamKind::SortOrder => ObjectBuilder::new()
            .schema_type(Type::String)
            .enum_values(Some(["asc", "desc"])),
    };
    Schema::Object(object.build())
}

fn payload_schema(payload: Payload) -> RefOr<Schema> {
    match payload {
        Payload::One(name) => Ref::from_schema_name(name).into(),
        Payload::Many(name) => {
            Schema::Array(ArrayBuilder::new().items(Ref::from_schema_name(name)).build()).into()
        }
    }
}

fn request_body(payload: Payload) -> RequestBody {
    RequestBodyBuilder::new()
        .content(
            JSON,
            ContentBuilder::new()
                .schema(Some(payload_schema(payload)))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

fn json_response(description: &str, payload: Option<Payload>) -> Response {
    let mut builder = ResponseBuilder::new().description(description);
    if let Some(payload) = payload {
        builder = builder.content(
            JSON,
            ContentBuilder::new()
                .schema(Some(payload_schema(payload)))
                .build(),
        );
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::path::HttpMethod;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for route in ROUTES {
            let operation = doc
                .paths
                .get_path_operation(route.path, route.verb.http_method())
                .unwrap_or_else(|| panic!("{} is not documented", route.operation_id));
            assert_eq!(operation.operation_id.as_deref(), Some(route.operation_id));
            assert_eq!(
                operation.tags.as_deref(),
                Some(&[route.resource.tag().to_string()][..])
            );
        }
        let documented: usize = doc
            .paths
            .paths
            .values()
            .map(|item| {
                [
                    &item.get,
                    &item.post,
                    &item.put,
                    &item.patch,
                    &item.delete,
                ]
                .iter()
                .filter(|op| op.is_some())
                .count()
            })
            .sum();
        assert_eq!(documented, ROUTES.len());
    }

    #[test]
    fn test_create_documents_201_and_login_documents_401() {
        let doc = ApiDoc::openapi();

        let create = doc
            .paths
            .get_path_operation("/carts", HttpMethod::Post)
            .unwrap();
        assert!(create.responses.responses.contains_key("201"));
        assert!(create.responses.responses.contains_key("500"));

        let login = doc
            .paths
            .get_path_operation("/auth/login", HttpMethod::Post)
            .unwrap();
        assert!(login.responses.responses.contains_key("200"));
        assert!(login.responses.responses.contains_key("400"));
        assert!(login.responses.responses.contains_key("401"));
        assert!(!login.responses.responses.contains_key("500"));
    }

    #[test]
    fn test_query_parameters_are_listed_in_order() {
        let doc = ApiDoc::openapi();
        let carts = doc
            .paths
            .get_path_operation("/carts", HttpMethod::Get)
            .unwrap();
        let names: Vec<_> = carts
            .parameters
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["startdate", "enddate", "limit", "sort"]);
    }

    #[test]
    fn test_schemas_and_tags_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        for name in ["Product", "User", "Address", "Cart", "CartProduct", "LoginRequest", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
        let tags: Vec<_> = doc.tags.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(tags, vec!["Products", "Users", "Carts", "Auth"]);
    }

    #[test]
    fn test_server_url_from_config() {
        let config = DocsConfig {
            server_url: "https://shop.example.com/api".into(),
            ..DocsConfig::default()
        };
        let doc = openapi(&config);
        let servers = doc.servers.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "https://shop.example.com/api");
    }

    #[test]
    fn test_document_is_stable() {
        let config = DocsConfig::default();
        let first = serde_json::to_string(&openapi(&config)).unwrap();
        let second = serde_json::to_string(&openapi(&config)).unwrap();
        assert_eq!(first, second);
    }
}
