//! Geographic bounding box

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// A geographic bounding box in degrees, `left,bottom,right,top` order
/// as the API's `bbox` query parameter expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    /// Western longitude bound.
    pub left: f64,
    /// Southern latitude bound.
    pub bottom: f64,
    /// Eastern longitude bound.
    pub right: f64,
    /// Northern latitude bound.
    pub top: f64,
}

impl Bbox {
    /// Creates a bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBbox`] when a bound is outside the
    /// valid lon/lat ranges or the box is inverted.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> DomainResult<Self> {
        if !(-180.0..=180.0).contains(&left) || !(-180.0..=180.0).contains(&right) {
            return Err(DomainError::InvalidBbox(format!(
                "longitude out of range: {left}..{right}"
            )));
        }
        if !(-90.0..=90.0).contains(&bottom) || !(-90.0..=90.0).contains(&top) {
            return Err(DomainError::InvalidBbox(format!(
                "latitude out of range: {bottom}..{top}"
            )));
        }
        if left > right || bottom > top {
            return Err(DomainError::InvalidBbox(format!(
                "inverted box: {left},{bottom},{right},{top}"
            )));
        }
        Ok(Self {
            left,
            bottom,
            right,
            top,
        })
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.bottom, self.right, self.top)
    }
}
