//! Delay time series for the station charts.
//!
//! Observations come in sparse and keyed by local labels. This module parses
//! the labels, lays a fixed grid of slots over a day, and fills every slot
//! with either the matching observation or an empty placeholder.

pub mod chart;
pub mod label;
pub mod reconcile;
pub mod types;
pub mod window;

pub use chart::{DelayChart, Measure, Orientation};
pub use reconcile::reconcile;
pub use types::{Bucket, Observation};
pub use window::Window;
