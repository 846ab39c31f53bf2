// Library root for the ASCII garden
//
// This file is the entry point for the library crate (ascii_garden)
// It declares all the modules that make up our library
//
// Data flows leaf-first through the modules:
//   plants/registry → TextBlock → layout + canvas (in composer) → renderer

pub mod block;
pub mod canvas;
pub mod error;

// Plant generators and the kind → provider registry
pub mod plants;
pub mod registry;

// Arranging plants into a garden
pub mod composer;
pub mod layout;

// Output and startup configuration
pub mod config;
pub mod renderer;

// Re-export commonly used types at the library root for convenience
// This allows users to write:
//   use ascii_garden::GardenComposer;
// instead of:
//   use ascii_garden::composer::GardenComposer;
pub use block::TextBlock;
pub use canvas::Canvas;
pub use composer::{ComposeOptions, GardenComposer, Placement, PlantSpec};
pub use error::{GardenError, Result};
pub use layout::LayoutPolicy;
pub use plants::{PlantParams, PlantProvider};
pub use registry::PlantRegistry;
pub use renderer::{ClearMode, GardenRenderer};
