//! Dense k-means clustering.
//!
//! `lloyd` is a small library implementing Lloyd's algorithm for dense
//! vectors, generic over `f32` and `f64`.
//!
//! The primary public API is under [`cluster`], which provides:
//! - k-means (random seeding, Lloyd iterations, at most 255 clusters)
//! - an optional settling accelerator that stops re-scanning points whose
//!   assignment has stabilized, with neighbor invalidation for
//!   locality-ordered data
//!
//! ```rust
//! use lloyd::{Clustering, Kmeans};
//!
//! let data = vec![vec![0.0f32, 0.0], vec![0.2, 0.1], vec![8.0, 8.0], vec![8.1, 7.9]];
//! let labels = Kmeans::new(2).with_seed(7).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), 4);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, FitStatus, Kmeans, KmeansFit, MAX_CLUSTERS};
pub use error::{Error, Result};
