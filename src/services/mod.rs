//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod ruta_service;
mod usuario_service;

pub use ruta_service::{RUTA_NOT_FOUND, RutaService};
pub use usuario_service::{USUARIO_DELETED, USUARIO_NOT_FOUND, UsuarioService};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since every repository shares its data via `Arc`.
#[derive(Clone)]
pub struct Services {
    pub usuarios: UsuarioService,
    pub rutas: RutaService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            usuarios: UsuarioService::new(repos.usuarios),
            rutas: RutaService::new(repos.rutas),
        }
    }
}
