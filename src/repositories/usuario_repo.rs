//! In-memory user store.
//!
//! `UsuarioCollection` holds the records and implements the listing, id
//! assignment and lookup rules. `UsuarioRepository` shares one collection
//! across request handlers behind an async reader/writer lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{NewUsuario, Usuario, UsuarioFilter};

/// Ordered store of user records.
///
/// Ids are unique at all times. A new id is `max(existing) + 1`, or 1 when
/// empty, so ids freed by deletion come back only when the deleted id was
/// the maximum.
#[derive(Debug, Clone, Default)]
pub struct UsuarioCollection {
    usuarios: Vec<Usuario>,
}

impl UsuarioCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five sample records the service starts with.
    pub fn seeded() -> Self {
        let seed = [
            (1, "Math Jhon", 25),
            (2, "Sarah Smith", 30),
            (3, "Carlos Rodriguez", 28),
            (4, "Ana García", 22),
            (5, "Mike Johnson", 35),
        ];

        Self {
            usuarios: seed
                .into_iter()
                .map(|(id, nombre, edad)| Usuario {
                    id,
                    nombre: nombre.to_string(),
                    edad,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.usuarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usuarios.is_empty()
    }

    /// Records matching every predicate of `filter`, in insertion order.
    pub fn list(&self, filter: &UsuarioFilter) -> Vec<Usuario> {
        self.usuarios
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect()
    }

    /// Id the next inserted record will receive.
    pub fn next_id(&self) -> i32 {
        self.usuarios
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Appends a record with a collection-assigned id and returns it.
    pub fn insert(&mut self, new_usuario: NewUsuario) -> Usuario {
        let usuario = new_usuario.into_usuario(self.next_id());
        self.usuarios.push(usuario.clone());
        usuario
    }

    pub fn find(&self, id: i32) -> Option<&Usuario> {
        self.usuarios.iter().find(|u| u.id == id)
    }

    /// Removes the record with `id`, keeping the order of the others.
    pub fn remove(&mut self, id: i32) -> Option<Usuario> {
        let index = self.usuarios.iter().position(|u| u.id == id)?;
        Some(self.usuarios.remove(index))
    }
}

/// Shared handle to the user collection.
///
/// Cloning is cheap (one `Arc` increment). Mutations hold the write lock for
/// the whole operation so id computation and append happen atomically.
#[derive(Clone)]
pub struct UsuarioRepository {
    collection: Arc<RwLock<UsuarioCollection>>,
}

impl UsuarioRepository {
    pub fn new(collection: UsuarioCollection) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
        }
    }

    pub async fn list(&self, filter: &UsuarioFilter) -> Vec<Usuario> {
        self.collection.read().await.list(filter)
    }

    pub async fn create(&self, new_usuario: NewUsuario) -> Usuario {
        self.collection.write().await.insert(new_usuario)
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Usuario> {
        self.collection.read().await.find(id).cloned()
    }

    /// Deletes a record.
    ///
    /// # Returns
    /// The removed record, or `None` when no record had that id
    pub async fn delete(&self, id: i32) -> Option<Usuario> {
        self.collection.write().await.remove(id)
    }

    pub async fn count(&self) -> usize {
        self.collection.read().await.len()
    }
}
