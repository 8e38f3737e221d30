//! User service for business logic operations.
//!
//! Wraps the in-memory repository with presence validation and the
//! not-found mapping used by the HTTP layer.

use crate::error::{AppError, AppResult};
use crate::models::{NewUsuario, Usuario, UsuarioFilter};
use crate::repositories::UsuarioRepository;

/// Message returned when an id does not match any record.
pub const USUARIO_NOT_FOUND: &str = "Usuario no encontrado";

/// Confirmation message for a successful deletion.
pub const USUARIO_DELETED: &str = "Usuario eliminado exitosamente";

/// User service for handling user-related business logic.
///
/// Cloning is cheap since the repository shares its collection via `Arc`.
#[derive(Clone)]
pub struct UsuarioService {
    repo: UsuarioRepository,
}

impl UsuarioService {
    /// Creates a new UsuarioService with the given repository.
    pub fn new(repo: UsuarioRepository) -> Self {
        Self { repo }
    }

    /// Lists the records matching every predicate of `filter`.
    ///
    /// # Returns
    /// The matching records in insertion order; never fails
    pub async fn list_usuarios(&self, filter: &UsuarioFilter) -> Vec<Usuario> {
        let usuarios = self.repo.list(filter).await;
        tracing::debug!(
            filter = ?filter,
            count = usuarios.len(),
            "Listed usuarios"
        );
        usuarios
    }

    /// Creates a new record with a collection-assigned id.
    ///
    /// # Arguments
    /// * `new_usuario` - Validated creation data
    ///
    /// # Returns
    /// The created record
    pub async fn create_usuario(&self, new_usuario: NewUsuario) -> AppResult<Usuario> {
        let usuario = self.repo.create(new_usuario).await;
        tracing::info!(usuario_id = usuario.id, "Usuario created");
        Ok(usuario)
    }

    /// Gets a record by id.
    ///
    /// # Returns
    /// The record if found, or `NotFound` error
    pub async fn get_usuario(&self, id: i32) -> AppResult<Usuario> {
        self.repo
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(USUARIO_NOT_FOUND))
    }

    /// Deletes a record by id.
    ///
    /// # Returns
    /// The removed record, or `NotFound` error when no record had that id
    pub async fn delete_usuario(&self, id: i32) -> AppResult<Usuario> {
        let removed = self
            .repo
            .delete(id)
            .await
            .ok_or_else(|| AppError::not_found(USUARIO_NOT_FOUND))?;
        tracing::info!(usuario_id = id, "Usuario deleted");
        Ok(removed)
    }

    /// Number of stored records, used by the health check.
    pub async fn count(&self) -> usize {
        self.repo.count().await
    }
}
