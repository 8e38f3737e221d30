use std::sync::Arc;

use crate::models::Ruta;

/// Read-only route catalogue.
#[derive(Clone)]
pub struct RutaRepository {
    rutas: Arc<Vec<Ruta>>,
}

impl RutaRepository {
    pub fn new(rutas: Vec<Ruta>) -> Self {
        Self {
            rutas: Arc::new(rutas),
        }
    }

    /// Catalogue served by the `/api/rutas` endpoints.
    pub fn catalogue() -> Self {
        Self::new(vec![
            Ruta::new("1", "Madrid", "Barcelona", 621.0),
            Ruta::new("2", "Barcelona", "Valencia", 351.0),
        ])
    }

    pub fn list_all(&self) -> Vec<Ruta> {
        self.rutas.as_ref().clone()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Ruta> {
        self.rutas.iter().find(|r| r.id == id).cloned()
    }
}
