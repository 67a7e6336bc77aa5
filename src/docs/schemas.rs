//! Upstream data shapes, for documentation only.
//!
//! The gateway never constructs these; it relays whatever the upstream
//! returns. They exist so the OpenAPI document can describe the surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Fjallraven - Foldsack No. 1 Backpack")]
    pub title: String,
    #[schema(example = 109.95)]
    pub price: f64,
    pub description: String,
    #[schema(example = "men's clothing")]
    pub category: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Geolocation {
    #[schema(example = "-37.3159")]
    pub lat: String,
    #[schema(example = "81.1496")]
    pub long: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[schema(example = "kilcoole")]
    pub city: String,
    #[schema(example = "7835 new road")]
    pub street: String,
    #[schema(example = 3)]
    pub number: i64,
    #[schema(example = "12926-3874")]
    pub zipcode: String,
    pub geolocation: Geolocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserName {
    #[schema(example = "John")]
    pub firstname: String,
    #[schema(example = "Doe")]
    pub lastname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// The user ID
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// User email
    #[schema(example = "john@example.com", format = "email")]
    pub email: String,
    /// User username
    #[schema(example = "johnd")]
    pub username: String,
    /// User password
    #[schema(example = "m38rmF$")]
    pub password: String,
    pub name: UserName,
    pub address: Option<Address>,
    #[schema(example = "1-570-236-7033")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = 4)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "2020-03-02", format = "date")]
    pub date: String,
    pub products: Vec<CartProduct>,
}
