//! Route catalogue DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Ruta;

/// Response body for a catalogue entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": "1", "origen": "Madrid", "destino": "Barcelona", "distancia": 621}))]
pub struct RutaResponse {
    pub id: String,
    pub origen: String,
    pub destino: String,
    /// Distance in kilometres
    pub distancia: f64,
}

impl From<Ruta> for RutaResponse {
    fn from(ruta: Ruta) -> Self {
        Self {
            id: ruta.id,
            origen: ruta.origen,
            destino: ruta.destino,
            distancia: ruta.distancia,
        }
    }
}
