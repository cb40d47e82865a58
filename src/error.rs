/*
 * Error Module
 *
 * Errors for flow-field construction. Once the field exists the simulation
 * has no recoverable error states, so this is the whole taxonomy.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    /// The world is smaller than a single field cell in some dimension.
    #[error("invalid dimensions: field must have at least one column and one row")]
    InvalidDimensions,

    /// A pre-built vector grid did not match the declared dimensions.
    #[error("vector count {got} does not match a {cols}x{rows} grid")]
    DimensionMismatch { cols: u32, rows: u32, got: usize },
}
