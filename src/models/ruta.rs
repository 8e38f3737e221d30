use serde::{Deserialize, Serialize};

/// A travel route between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruta {
    pub id: String,
    pub origen: String,
    pub destino: String,
    /// Distance in kilometres
    pub distancia: f64,
}

impl Ruta {
    pub fn new(id: &str, origen: &str, destino: &str, distancia: f64) -> Self {
        Self {
            id: id.to_string(),
            origen: origen.to_string(),
            destino: destino.to_string(),
            distancia,
        }
    }
}
