//! API data transfer objects shared by all endpoints.
//!
//! DTOs define the JSON wire shapes of the REST API. Requests deserialize into
//! the `Create*`/`Update*` types here, and domain models are converted into the
//! response types at the controller boundary. Field names follow the camelCase
//! convention of the HTTP API.

pub mod api;
pub mod medication;
pub mod prescription;
pub mod record;
pub mod user;
