//! Per-material settings table

use padkit_core::MaterialKind;
use serde::{Deserialize, Serialize};

/// One value for each [`MaterialKind`]
///
/// Serialises as a table keyed by material name, so a settings file reads
/// `font_size = { felt = 2.0, card = 2.0, leather = 2.0, exact_size = 2.0 }`.
/// All four entries are required when the table is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerMaterial<T> {
    pub felt: T,
    pub card: T,
    pub leather: T,
    pub exact_size: T,
}

impl<T> PerMaterial<T> {
    /// Build a table from a function of the material
    pub fn from_fn(mut f: impl FnMut(MaterialKind) -> T) -> Self {
        Self {
            felt: f(MaterialKind::Felt),
            card: f(MaterialKind::Card),
            leather: f(MaterialKind::Leather),
            exact_size: f(MaterialKind::ExactSize),
        }
    }

    /// Value for `material`
    pub fn get(&self, material: MaterialKind) -> &T {
        match material {
            MaterialKind::Felt => &self.felt,
            MaterialKind::Card => &self.card,
            MaterialKind::Leather => &self.leather,
            MaterialKind::ExactSize => &self.exact_size,
        }
    }

    /// Iterate `(material, value)` pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialKind, &T)> {
        MaterialKind::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

impl<T: Clone> PerMaterial<T> {
    /// Same value for every material
    pub fn uniform(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}
