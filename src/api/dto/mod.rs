//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `usuario` - Usuario request/response DTOs
//! - `ruta` - Route catalogue DTOs
//! - `health` - Health check DTOs
//! - `error` - Common error response DTOs

mod common;
mod error;
mod health;
mod ruta;
mod usuario;

pub use common::MessageResponse;
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use ruta::RutaResponse;
pub use usuario::{CreateUsuarioRequest, ListUsuariosParams, UsuarioResponse};
