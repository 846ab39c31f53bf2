use std::collections::BTreeMap;

use crate::block::TextBlock;
use crate::error::{GardenError, Result};
use crate::plants::{random_flower, random_tree, FlowerStyle, PlantParams, PlantProvider, TreeStyle};

/// Kind name that draws a random flower style
pub const FLOWER: &str = "flower";

/// Kind name that draws a random tree style
pub const TREE: &str = "tree";

/// Maps plant kind names to the providers that draw them
///
/// The composer receives a registry when it is built instead of looking
/// kinds up in global state, so tests can swap in fake providers.
///
/// **Rust Concept: Trait objects**
/// `Box<dyn PlantProvider>` lets one map hold plain functions, enum methods
/// and closures side by side. A `BTreeMap` keeps `kinds()` sorted.
#[derive(Default)]
pub struct PlantRegistry {
    providers: BTreeMap<String, Box<dyn PlantProvider>>,
}

impl PlantRegistry {
    /// A registry with no kinds at all
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in flower and tree
    ///
    /// Each style is registered under its own name, plus `flower` and
    /// `tree` which pick a style at random from the seed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for style in FlowerStyle::ALL {
            registry.register(style.name(), move |params: &PlantParams| style.draw(params));
        }
        for style in TreeStyle::ALL {
            registry.register(style.name(), move |params: &PlantParams| style.draw(params));
        }
        registry.register(FLOWER, random_flower);
        registry.register(TREE, random_tree);

        registry
    }

    /// Add or replace the provider for `kind`
    pub fn register(&mut self, kind: impl Into<String>, provider: impl PlantProvider + 'static) {
        self.providers.insert(kind.into(), Box::new(provider));
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.providers.contains_key(kind)
    }

    /// Registered kind names in sorted order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Draw one plant of `kind`
    ///
    /// # Errors
    /// `UnknownPlantKind` if nothing is registered under `kind`; there is no
    /// fallback shape.
    pub fn get_plant_block(&self, kind: &str, params: &PlantParams) -> Result<TextBlock> {
        let provider = self
            .providers
            .get(kind)
            .ok_or_else(|| GardenError::UnknownPlantKind {
                kind: kind.to_string(),
            })?;
        Ok(provider.generate(params))
    }
}
