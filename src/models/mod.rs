mod ruta;
mod usuario;

pub use ruta::Ruta;
pub use usuario::{NewUsuario, REQUIRED_FIELDS_MESSAGE, Usuario, UsuarioFilter};
