//! Repository layer for data access operations.
//!
//! Both stores live in process memory; nothing survives a restart.

mod ruta_repo;
mod usuario_repo;

pub use ruta_repo::RutaRepository;
pub use usuario_repo::{UsuarioCollection, UsuarioRepository};

use crate::config::StoreConfig;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap: every repository shares its data through an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub usuarios: UsuarioRepository,
    pub rutas: RutaRepository,
}

impl Repositories {
    /// Creates the repositories, seeding the user collection when enabled.
    pub fn new(store: &StoreConfig) -> Self {
        let collection = if store.seed_sample_data {
            UsuarioCollection::seeded()
        } else {
            UsuarioCollection::new()
        };

        Self {
            usuarios: UsuarioRepository::new(collection),
            rutas: RutaRepository::catalogue(),
        }
    }
}
