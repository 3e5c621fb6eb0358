//! Clustering algorithms for grouping similar items.
//!
//! This module provides k-means clustering for dense vectors.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat until no assignment
//! changes.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! The result is a local optimum driven by the random initialization; fix a
//! seed for reproducible runs.
//!
//! ## Settling acceleration
//!
//! For large datasets whose index order tracks locality (raster-scanned
//! pixels being the canonical case), [`Kmeans`] can skip re-scanning points
//! whose assignment has been stable for a configured number of iterations,
//! un-skipping index neighbors of any point that changes. This is a lossy
//! speed knob; see the [`kmeans`] module docs for the trade-off.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! assert!(labels.iter().all(|&l| l < 2));
//!
//! // The richer entry point also reports the iteration count.
//! let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();
//! assert!(fit.converged);
//! assert!(fit.iterations >= 1);
//! ```

pub mod kmeans;
mod traits;
mod util;

pub use kmeans::{FitStatus, Kmeans, KmeansFit, MAX_CLUSTERS};
pub use traits::Clustering;
