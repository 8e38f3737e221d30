use crate::error::{AppError, AppResult};
use crate::models::Ruta;
use crate::repositories::RutaRepository;

pub const RUTA_NOT_FOUND: &str = "Ruta no encontrada";

/// Lookups over the static route catalogue.
#[derive(Clone)]
pub struct RutaService {
    repo: RutaRepository,
}

impl RutaService {
    pub fn new(repo: RutaRepository) -> Self {
        Self { repo }
    }

    pub fn list_rutas(&self) -> Vec<Ruta> {
        self.repo.list_all()
    }

    /// Gets a route by id, or `NotFound` when the catalogue has no such entry.
    pub fn get_ruta(&self, id: &str) -> AppResult<Ruta> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(RUTA_NOT_FOUND))
    }
}
