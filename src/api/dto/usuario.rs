//! Usuario DTOs for API requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::AppResult;
use crate::models::{NewUsuario, Usuario, UsuarioFilter};
use crate::utils::number::parse_int_prefix;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new usuario.
///
/// A field of the wrong JSON type is read as absent, so every malformed
/// object ends up with the same required-fields rejection.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct CreateUsuarioRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(
        required(message = "Nombre y edad son requeridos"),
        length(min = 1, message = "Nombre y edad son requeridos")
    )]
    #[schema(example = "Zoe")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    #[validate(required(message = "Nombre y edad son requeridos"))]
    #[schema(example = 40)]
    pub edad: Option<i32>,
}

impl CreateUsuarioRequest {
    /// Converts the request DTO into a NewUsuario for insertion.
    pub fn into_new_usuario(self) -> AppResult<NewUsuario> {
        NewUsuario::try_new(self.nombre, self.edad)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .and_then(|n| i32::try_from(n).ok()))
}

/// Query parameters for listing usuarios.
///
/// Age bounds stay raw strings here. A bound is read from its leading
/// integer, and one without any is dropped instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsuariosParams {
    /// Case-insensitive part of the name
    pub nombre: Option<String>,
    /// Minimum age, inclusive
    #[serde(rename = "edadMin")]
    #[param(value_type = Option<i32>)]
    pub edad_min: Option<String>,
    /// Maximum age, inclusive
    #[serde(rename = "edadMax")]
    #[param(value_type = Option<i32>)]
    pub edad_max: Option<String>,
}

impl ListUsuariosParams {
    pub fn into_filter(self) -> UsuarioFilter {
        UsuarioFilter {
            nombre: self.nombre.filter(|n| !n.is_empty()),
            edad_min: parse_bound("edadMin", self.edad_min),
            edad_max: parse_bound("edadMax", self.edad_max),
        }
    }
}

fn parse_bound(name: &str, raw: Option<String>) -> Option<i32> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let bound = parse_int_prefix(&raw);
    if bound.is_none() {
        tracing::debug!(param = name, value = %raw, "Ignoring non-integer age filter");
    }
    bound
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for usuario data.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(example = json!({"id": 1, "nombre": "Math Jhon", "edad": 25}))]
pub struct UsuarioResponse {
    pub id: i32,
    pub nombre: String,
    pub edad: i32,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nombre: usuario.nombre,
            edad: usuario.edad,
        }
    }
}
