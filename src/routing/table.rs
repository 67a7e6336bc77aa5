//! The forwarding route table.
//!
//! Every operation the gateway exposes is one [`ForwardRoute`] entry in
//! [`ROUTES`]. The HTTP layer mounts the entries and the documentation
//! generator describes them; neither keeps a second list.

use axum::http::{Method, StatusCode};
use axum::routing::MethodFilter;
use utoipa::openapi::path::HttpMethod;

/// HTTP verbs used by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }

    pub fn method_filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Delete => MethodFilter::DELETE,
        }
    }

    pub fn http_method(self) -> HttpMethod {
        match self {
            Verb::Get => HttpMethod::Get,
            Verb::Post => HttpMethod::Post,
            Verb::Put => HttpMethod::Put,
            Verb::Patch => HttpMethod::Patch,
            Verb::Delete => HttpMethod::Delete,
        }
    }
}

/// Resource group a route belongs to. Doubles as the documentation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Products,
    Users,
    Carts,
    Auth,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Products,
        Resource::Users,
        Resource::Carts,
        Resource::Auth,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Resource::Products => "Products",
            Resource::Users => "Users",
            Resource::Carts => "Carts",
            Resource::Auth => "Auth",
        }
    }
}

/// Value type of a documented parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Text,
    /// `asc` or `desc`.
    SortOrder,
}

/// A single dynamic path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParam {
    pub name: &'static str,
    pub description: &'static str,
}

/// A query parameter the upstream understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
}

/// How query parameters are allowed through to the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRule {
    /// Forwarded whenever present.
    Single(QueryParam),
    /// Inclusive range; forwarded only when both bounds are present.
    Range(QueryParam, QueryParam),
}

impl QueryRule {
    pub fn params(&self) -> Vec<QueryParam> {
        match *self {
            QueryRule::Single(param) => vec![param],
            QueryRule::Range(start, end) => vec![start, end],
        }
    }
}

/// What is sent as the upstream request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRule {
    /// No body.
    None,
    /// The inbound body, byte for byte.
    Verbatim,
    /// `{username, password}`, both required.
    Credentials,
}

/// How a successful upstream response is relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    /// Upstream status and body.
    Relay,
    /// Upstream body with 201.
    Created,
    /// `{token, status: "success"}` with the upstream status.
    Token,
}

/// How a failed forwarding call is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureRule {
    /// 500 with `{error}`.
    Internal,
    /// 401 with `{error, details}`.
    Unauthorized,
}

impl FailureRule {
    pub fn status(self) -> StatusCode {
        match self {
            FailureRule::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            FailureRule::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Named component schema in the API documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    One(&'static str),
    Many(&'static str),
}

/// Documentation attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDoc {
    pub summary: &'static str,
    pub request: Option<Payload>,
    pub response: Option<Payload>,
    pub response_description: &'static str,
    /// Description of the documented 404, if the upstream can report one.
    pub not_found: Option<&'static str>,
}

/// One forwarded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardRoute {
    pub operation_id: &'static str,
    pub resource: Resource,
    pub verb: Verb,
    /// Inbound path template, relative to the API prefix.
    pub path: &'static str,
    /// Upstream path; the path parameter, if any, is appended as a segment.
    pub upstream: &'static str,
    pub param: Option<PathParam>,
    pub query: &'static [QueryRule],
    pub body: BodyRule,
    pub success: SuccessRule,
    pub failure: FailureRule,
    pub doc: RouteDoc,
}

impl ForwardRoute {
    const fn new(
        resource: Resource,
        verb: Verb,
        operation_id: &'static str,
        path: &'static str,
        upstream: &'static str,
        summary: &'static str,
    ) -> Self {
        let body = match verb {
            Verb::Post | Verb::Put | Verb::Patch => BodyRule::Verbatim,
            Verb::Get | Verb::Delete => BodyRule::None,
        };
        Self {
            operation_id,
            resource,
            verb,
            path,
            upstream,
            param: None,
            query: &[],
            body,
            success: SuccessRule::Relay,
            failure: FailureRule::Internal,
            doc: RouteDoc {
                summary,
                request: None,
                response: None,
                response_description: "Upstream response",
                not_found: None,
            },
        }
    }

    const fn param(mut self, param: PathParam) -> Self {
        self.param = Some(param);
        self
    }

    const fn query(mut self, query: &'static [QueryRule]) -> Self {
        self.query = query;
        self
    }

    const fn created(mut self) -> Self {
        self.success = SuccessRule::Created;
        self
    }

    const fn accepts(mut self, payload: Payload) -> Self {
        self.doc.request = Some(payload);
        self
    }

    const fn returns(mut self, payload: Payload, description: &'static str) -> Self {
        self.doc.response = Some(payload);
        self.doc.response_description = description;
        self
    }

    const fn described(mut self, description: &'static str) -> Self {
        self.doc.response_description = description;
        self
    }

    const fn not_found(mut self, description: &'static str) -> Self {
        self.doc.not_found = Some(description);
        self
    }

    /// Status a successful call answers with, or `None` when the upstream
    /// status is relayed.
    pub fn fixed_success_status(&self) -> Option<StatusCode> {
        match self.success {
            SuccessRule::Created => Some(StatusCode::CREATED),
            SuccessRule::Relay | SuccessRule::Token => None,
        }
    }
}

const ID: PathParam = PathParam {
    name: "id",
    description: "Resource ID",
};

const USER_ID: PathParam = PathParam {
    name: "userId",
    description: "User ID",
};

const LIMIT: QueryParam = QueryParam {
    name: "limit",
    description: "Limit the number of results returned",
    kind: ParamKind::Integer,
};

const SORT: QueryParam = QueryParam {
    name: "sort",
    description: "Sort order",
    kind: ParamKind::SortOrder,
};

const START_DATE: QueryParam = QueryParam {
    name: "startdate",
    description: "Start of the date range (inclusive)",
    kind: ParamKind::Text,
};

const END_DATE: QueryParam = QueryParam {
    name: "enddate",
    description: "End of the date range (inclusive)",
    kind: ParamKind::Text,
};

const USER_FILTERS: &[QueryRule] = &[QueryRule::Single(LIMIT), QueryRule::Single(SORT)];

const CART_FILTERS: &[QueryRule] = &[
    QueryRule::Range(START_DATE, END_DATE),
    QueryRule::Single(LIMIT),
    QueryRule::Single(SORT),
];

const DATE_RANGE: &[QueryRule] = &[QueryRule::Range(START_DATE, END_DATE)];

use Payload::{Many, One};
use Resource::{Auth, Carts, Products, Users};
use Verb::{Delete, Get, Patch, Post, Put};

/// Every operation mounted under the API prefix.
pub static ROUTES: &[ForwardRoute] = &[
    // Products
    ForwardRoute::new(Products, Get, "getAllProducts", "/products", "products", "Get all products")
        .returns(Many("Product"), "List of products"),
    ForwardRoute::new(Products, Get, "getProductById", "/products/{id}", "products", "Get product by ID")
        .param(ID)
        .returns(One("Product"), "Product details")
        .not_found("Product not found"),
    ForwardRoute::new(Products, Post, "addProduct", "/products", "products", "Create a new product")
        .created()
        .accepts(One("Product"))
        .returns(One("Product"), "Product created successfully"),
    ForwardRoute::new(Products, Put, "updateProduct", "/products/{id}", "products", "Update product")
        .param(ID)
        .accepts(One("Product"))
        .returns(One("Product"), "Product updated successfully")
        .not_found("Product not found"),
    ForwardRoute::new(Products, Delete, "deleteProduct", "/products/{id}", "products", "Delete product")
        .param(ID)
        .described("Product deleted successfully")
        .not_found("Product not found"),
    // Users
    ForwardRoute::new(Users, Get, "getAllUsers", "/users", "users", "Get all users")
        .query(USER_FILTERS)
        .returns(Many("User"), "List of users"),
    ForwardRoute::new(Users, Get, "getUserById", "/users/{id}", "users", "Get user by ID")
        .param(ID)
        .returns(One("User"), "User details")
        .not_found("User not found"),
    ForwardRoute::new(Users, Post, "addUser", "/users", "users", "Create a new user")
        .created()
        .accepts(One("User"))
        .returns(One("User"), "User created successfully"),
    ForwardRoute::new(Users, Put, "updateUser", "/users/{id}", "users", "Update user")
        .param(ID)
        .accepts(One("User"))
        .returns(One("User"), "User updated successfully")
        .not_found("User not found"),
    ForwardRoute::new(Users, Patch, "patchUser", "/users/{id}", "users", "Partially update user")
        .param(ID)
        .accepts(One("User"))
        .returns(One("User"), "User partially updated successfully")
        .not_found("User not found"),
    ForwardRoute::new(Users, Delete, "deleteUser", "/users/{id}", "users", "Delete user")
        .param(ID)
        .described("User deleted successfully")
        .not_found("User not found"),
    // Carts
    ForwardRoute::new(Carts, Get, "getAllCarts", "/carts", "carts", "Get all carts")
        .query(CART_FILTERS)
        .returns(Many("Cart"), "List of carts"),
    ForwardRoute::new(Carts, Get, "getCartById", "/carts/{id}", "carts", "Get cart by ID")
        .param(ID)
        .returns(One("Cart"), "Cart details")
        .not_found("Cart not found"),
    ForwardRoute::new(Carts, Get, "getUserCarts", "/carts/user/{userId}", "carts/user", "Get user's carts")
        .param(USER_ID)
        .query(DATE_RANGE)
        .returns(Many("Cart"), "List of user's carts")
        .not_found("No carts found for this user"),
    ForwardRoute::new(Carts, Post, "addCart", "/carts", "carts", "Create a new cart")
        .created()
        .accepts(One("Cart"))
        .returns(One("Cart"), "Cart created successfully"),
    ForwardRoute::new(Carts, Put, "updateCart", "/carts/{id}", "carts", "Update cart")
        .param(ID)
        .accepts(One("Cart"))
        .returns(One("Cart"), "Cart updated successfully")
        .not_found("Cart not found"),
    ForwardRoute::new(Carts, Patch, "patchCart", "/carts/{id}", "carts", "Partially update cart")
        .param(ID)
        .accepts(One("Cart"))
        .returns(One("Cart"), "Cart partially updated successfully")
        .not_found("Cart not found"),
    ForwardRoute::new(Carts, Delete, "deleteCart", "/carts/{id}", "carts", "Delete cart")
        .param(ID)
        .described("Cart deleted successfully")
        .not_found("Cart not found"),
    // Auth
    ForwardRoute {
        body: BodyRule::Credentials,
        success: SuccessRule::Token,
        failure: FailureRule::Unauthorized,
        ..ForwardRoute::new(Auth, Post, "login", "/auth/login", "auth/login", "Log in and obtain a token")
            .accepts(One("LoginRequest"))
            .returns(One("LoginResponse"), "Login successful")
    },
];

/// Look up a route by its operation id.
pub fn find(operation_id: &str) -> Option<&'static ForwardRoute> {
    ROUTES.iter().find(|route| route.operation_id == operation_id)
}
