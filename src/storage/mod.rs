//! Almacenes clave-valor donde se guarda el progreso.

use crate::error::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Almacén local de documentos de texto indexados por clave.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Almacén en memoria. Las copias comparten contenido, así que sirve para
/// simular "cerrar y volver a abrir" en los tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variante que rechaza escrituras (cuota llena, modo privado...).
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Rejected(format!("`{key}` is read-only")));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

/// Backend por defecto de la plataforma; si no hay ninguno disponible se
/// trabaja en memoria y el progreso dura lo que dure la sesión.
pub fn default_backend() -> Box<dyn KeyValueStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match file::FileStore::in_data_dir() {
            Ok(store) => return Box::new(store),
            Err(e) => log::warn!("No data directory, progress stays in memory: {e}"),
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        match web::LocalStorageStore::open() {
            Ok(store) => return Box::new(store),
            Err(e) => log::warn!("localStorage unavailable, progress stays in memory: {e}"),
        }
    }
    Box::new(MemoryStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let mut a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(b.get("missing").unwrap(), None);
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let mut s = MemoryStore::read_only();
        assert!(matches!(s.set("k", "v"), Err(StorageError::Rejected(_))));
        assert_eq!(s.get("k").unwrap(), None);
    }
}
