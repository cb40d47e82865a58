/*
 * Flow Field Particle Visualization - Module Definitions
 *
 * This file defines the module structure for the flow-field application:
 * a grid of noise-derived vectors advects a fixed population of particles,
 * drawn each frame into an accumulating trail.
 */

// Re-export key components for easier access
pub use error::FieldError;
pub use field::FlowField;
pub use params::SimulationParams;
pub use particle::Particle;
pub use renderer::RenderMode;
pub use sim::{Mode, Simulation};
pub use vec2::Vec2;

// Define modules
pub mod app;
pub mod debug;
pub mod error;
pub mod field;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod sim;
pub mod vec2;
