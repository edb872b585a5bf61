//! A shared collection of named airfoils.
//!
//! Rotor sections hold their airfoil behind an [`Arc`], so a library lets
//! many sections (and many rotors) share one polar table without copying.

use std::{collections::HashMap, sync::Arc};

use super::Airfoil;

/// Named airfoils, shared by reference.
#[derive(Debug, Clone, Default)]
pub struct AirfoilLibrary {
    airfoils: HashMap<String, Arc<Airfoil>>,
}

impl AirfoilLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an airfoil under a name, replacing any previous entry.
    ///
    /// Returns the shared handle so the caller can use it immediately.
    pub fn insert(&mut self, name: impl Into<String>, airfoil: Airfoil) -> Arc<Airfoil> {
        let airfoil = Arc::new(airfoil);
        self.airfoils.insert(name.into(), Arc::clone(&airfoil));
        airfoil
    }

    /// Looks up an airfoil by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Airfoil>> {
        self.airfoils.get(name).map(Arc::clone)
    }

    /// Iterates over the stored names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.airfoils.keys().map(String::as_str)
    }

    /// Returns the number of stored airfoils.
    #[must_use]
    pub fn len(&self) -> usize {
        self.airfoils.len()
    }

    /// Returns `true` if the library holds no airfoils.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airfoils.is_empty()
    }
}
