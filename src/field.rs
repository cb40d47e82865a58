/*
 * Flow Field Module
 *
 * This module builds and stores the static grid of vectors that advects the
 * particles. The grid is generated exactly once from OpenSimplex noise and
 * is read-only afterwards: no method mutates it post-construction.
 *
 * Each cell covers cell_size x cell_size pixels of the world. The noise
 * sample at a cell is shifted from [-1, 1] into [0, 2] and doubles as both
 * the vector's angle (scaled by pi) and its magnitude, so field strength
 * varies spatially with the noise value.
 */

use nannou::noise::{NoiseFn, OpenSimplex, Seedable};
use std::f64::consts::PI;

use crate::error::FieldError;
use crate::vec2::Vec2;

pub struct FlowField {
    cols: u32,
    rows: u32,
    cell_size: u32,
    vectors: Vec<Vec2>,
}

impl FlowField {
    // Generate the field for a world of the given pixel dimensions. Runs
    // once at startup; the same seed always produces the same grid.
    pub fn generate(
        world_width: u32,
        world_height: u32,
        cell_size: u32,
        noise_factor: f64,
        seed: u32,
    ) -> Result<Self, FieldError> {
        let cols = world_width / cell_size;
        let rows = world_height / cell_size;
        if cols == 0 || rows == 0 {
            return Err(FieldError::InvalidDimensions);
        }

        let noise = OpenSimplex::new().set_seed(seed);
        let mut vectors = vec![Vec2::zero(); (cols * rows) as usize];

        for i in 0..cols {
            for j in 0..rows {
                let nval = noise.get([i as f64 / noise_factor, j as f64 / noise_factor]) + 1.0;
                let ang = nval * PI;
                vectors[(i + j * cols) as usize] = Vec2::from_angle(ang) * nval;
            }
        }

        Ok(Self {
            cols,
            rows,
            cell_size,
            vectors,
        })
    }

    // Build a field from a pre-computed grid. Used by tests to inject
    // known vectors.
    pub fn from_vectors(
        cols: u32,
        rows: u32,
        cell_size: u32,
        vectors: Vec<Vec2>,
    ) -> Result<Self, FieldError> {
        if cols == 0 || rows == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        if vectors.len() != (cols * rows) as usize {
            return Err(FieldError::DimensionMismatch {
                cols,
                rows,
                got: vectors.len(),
            });
        }
        Ok(Self {
            cols,
            rows,
            cell_size,
            vectors,
        })
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn vectors(&self) -> &[Vec2] {
        &self.vectors
    }

    // Field vector at cell (cx, cy). Both indices must lie within the
    // grid; callers clamp indices derived from particle positions.
    pub fn get(&self, cx: u32, cy: u32) -> Vec2 {
        self.vectors[(cx + cy * self.cols) as usize]
    }

    // Pixel coordinates of a cell's center, for the vector overlay
    pub fn cell_center(&self, cx: u32, cy: u32) -> (u32, u32) {
        (
            self.cell_size * cx + self.cell_size / 2,
            self.cell_size * cy + self.cell_size / 2,
        )
    }
}
