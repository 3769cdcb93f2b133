//! Game-agnostic core of the handheld block tools.
//!
//! * [`world`]: block catalog, compact state ids, and the in-memory world.
//! * [`variant`]: variant rings and the registry that owns them.
//! * [`paint`]: dye colors and the paint classification tables.
//! * [`transform`]: the cycle (hammer) and repaint (brush) transforms.

pub mod error;
pub mod paint;
pub mod transform;
pub mod variant;
pub mod world;
