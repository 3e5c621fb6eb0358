//! K-means clustering via Lloyd's algorithm, with an optional settling
//! accelerator.
//!
//! # The Algorithm (Lloyd, 1957/1982)
//!
//! Alternate two steps until no assignment changes:
//!
//! 1. **Assignment**: attach each point to its nearest centroid (squared
//!    Euclidean distance).
//! 2. **Update**: move each centroid to the mean of its attached points.
//!
//! **Objective**: within-cluster sum of squares,
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! which is non-increasing across iterations and converges to a *local*
//! optimum determined by the initial centroids.
//!
//! ## Initialization
//!
//! Centroids are seeded by uniform random sampling **with replacement** from
//! the point set. Two draws may land on the same point; the resulting
//! duplicate centroid then attracts no points (strict `<` tie-breaking) and
//! is left in place by the empty-cluster policy.
//!
//! ## The settling accelerator
//!
//! An optional heuristic for large, locality-ordered datasets (e.g.
//! raster-scanned pixels): once a point has kept the same assignment for more
//! than [`Kmeans::with_settle_at`] consecutive iterations, its distance scan
//! is skipped and the recorded assignment is reused. When a point *does*
//! change assignment, the settle counters of all points within
//! [`Kmeans::with_invalidation_window`] positions of it are reset, forcing
//! presumed-nearby points to be re-examined.
//!
//! This trades accuracy for speed: assignments can freeze early, and the run
//! may converge to a different local optimum than an exact run. The window
//! only helps when index adjacency correlates with real-world locality; that
//! ordering is a precondition the caller must uphold.
//!
//! ## Complexity
//!
//! - **Time**: O(iterations × points × k × dimension) exact; the accelerator
//!   removes the `k × dimension` factor for settled points.
//! - **Space**: O(k × dimension) centroids and accumulators, O(points)
//!   assignment map and settle counters.

use num_traits::Float;
use rand::prelude::*;

use super::traits::Clustering;
use super::util::squared_euclidean;
use crate::error::{Error, Result};

/// Cluster ids are stored as `u8`, so at most 255 clusters.
pub const MAX_CLUSTERS: usize = u8::MAX as usize;

/// K-means clusterer (Lloyd's algorithm).
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters, `1..=255`.
    k: usize,
    /// Optional hard bound on refinement iterations.
    max_iter: Option<usize>,
    /// Optional RNG seed for reproducible initialization.
    seed: Option<u64>,
    /// Iterations a point must stay unchanged before its scan is skipped.
    /// `u32::MAX` disables skipping entirely.
    settle_at: u32,
    /// Half-width, in index positions, of the settle-counter reset window
    /// around a point whose assignment changed.
    invalidate_up_to: usize,
}

/// Iteration count and convergence flag for one clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitStatus {
    /// Refinement iterations executed (each = one assignment + one update).
    pub iterations: usize,
    /// `false` only when a `max_iter` bound stopped the loop first.
    pub converged: bool,
}

/// Result of [`Kmeans::fit`]: final assignment map plus run statistics.
///
/// Centroid coordinates are intentionally not exposed; the contract of this
/// crate is the partition, not the model.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// One cluster id per input point, in input order.
    pub assignments: Vec<u8>,
    /// Refinement iterations executed.
    pub iterations: usize,
    /// Whether the run reached a fixed point (see [`FitStatus::converged`]).
    pub converged: bool,
}

impl Kmeans {
    /// Create a new k-means clusterer with `k` clusters.
    ///
    /// `k` is validated on fit: it must lie in `1..=255` so that cluster ids
    /// fit the `u8` assignment map.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: None,
            seed: None,
            settle_at: u32::MAX,
            invalidate_up_to: 0,
        }
    }

    /// Seed the centroid initializer for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of refinement iterations.
    ///
    /// Without a cap the loop runs until no assignment changes. Lloyd's
    /// algorithm converges in finitely many steps in theory, but
    /// floating-point boundary oscillation can stall progress on adversarial
    /// inputs; a cap turns that into a `converged: false` outcome.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Enable the settling accelerator: skip the distance scan for points
    /// whose assignment has been unchanged for more than `settle_at`
    /// consecutive iterations.
    ///
    /// The default (`u32::MAX`) never skips, making every pass exact.
    pub fn with_settle_at(mut self, settle_at: u32) -> Self {
        self.settle_at = settle_at;
        self
    }

    /// Reset the settle counters of every point within `window` index
    /// positions of a point whose assignment changed.
    ///
    /// Only meaningful together with [`with_settle_at`](Self::with_settle_at),
    /// and only when index adjacency tracks data locality (raster-scanned
    /// pixels, time series, ...). The default is 0: no neighbor propagation.
    pub fn with_invalidation_window(mut self, window: usize) -> Self {
        self.invalidate_up_to = window;
        self
    }

    /// Cluster a flat row-major buffer of `points × dimension` values.
    ///
    /// `assignments` must hold exactly one slot per point. It is read on
    /// entry (prior ids seed the convergence check, matching a zeroed buffer
    /// for a fresh run) and holds the final partition on exit.
    ///
    /// Returns the iteration count and whether the run converged. Works
    /// identically over `f32` and `f64`; single precision is the usual
    /// choice together with the settling accelerator.
    pub fn fit_raw<T: Float>(
        &self,
        data: &[T],
        dimension: usize,
        assignments: &mut [u8],
    ) -> Result<FitStatus> {
        self.validate(dimension)?;
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if data.len() % dimension != 0 {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "length must be a multiple of dimension",
            });
        }
        let points = data.len() / dimension;
        if assignments.len() != points {
            return Err(Error::DimensionMismatch {
                expected: points,
                found: assignments.len(),
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut engine = Engine::new(data, points, dimension, self);
        engine.seed_centroids(&mut rng);
        Ok(engine.run(assignments, self.max_iter))
    }

    /// Cluster a slice of equally-sized point vectors.
    ///
    /// Validates that all rows share one dimension, flattens to a contiguous
    /// buffer, and runs [`fit_raw`](Self::fit_raw) from a zeroed assignment
    /// map.
    pub fn fit<T: Float>(&self, data: &[Vec<T>]) -> Result<KmeansFit> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let dimension = data[0].len();
        for row in data.iter().skip(1) {
            if row.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found: row.len(),
                });
            }
        }

        let mut flat: Vec<T> = Vec::with_capacity(data.len() * dimension);
        for row in data {
            flat.extend_from_slice(row);
        }

        let mut assignments = vec![0u8; data.len()];
        let status = self.fit_raw(&flat, dimension, &mut assignments)?;
        Ok(KmeansFit {
            assignments,
            iterations: status.iterations,
            converged: status.converged,
        })
    }

    fn validate(&self, dimension: usize) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.k > MAX_CLUSTERS {
            return Err(Error::TooManyClusters { requested: self.k });
        }
        if dimension == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }
        Ok(())
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let fit = self.fit(data)?;
        Ok(fit.assignments.into_iter().map(usize::from).collect())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Working state for one clustering call.
///
/// Owns the centroids, the per-centroid accumulators, and the settle
/// counters; borrows the immutable point buffer. Everything here is
/// allocated at call entry and dropped at call exit.
struct Engine<'a, T> {
    data: &'a [T],
    points: usize,
    dimension: usize,
    k: usize,
    /// `k × dimension`, row-major.
    centroids: Vec<T>,
    /// Running per-centroid coordinate sums, `k × dimension`. Rebuilt every
    /// pass: the first member of a centroid overwrites, later members add.
    sums: Vec<T>,
    /// Per-centroid member counts for the current pass.
    counts: Vec<usize>,
    /// Consecutive iterations each point has kept its assignment.
    settled: Vec<u32>,
    settle_at: u32,
    invalidate_up_to: usize,
}

impl<'a, T: Float> Engine<'a, T> {
    fn new(data: &'a [T], points: usize, dimension: usize, config: &Kmeans) -> Self {
        Self {
            data,
            points,
            dimension,
            k: config.k,
            centroids: vec![T::zero(); config.k * dimension],
            sums: vec![T::zero(); config.k * dimension],
            counts: vec![0; config.k],
            settled: vec![0; points],
            settle_at: config.settle_at,
            invalidate_up_to: config.invalidate_up_to,
        }
    }

    /// Copy `k` random points (with replacement) into the centroid slots.
    fn seed_centroids(&mut self, rng: &mut dyn RngCore) {
        for slot in 0..self.k {
            let pick = rng.random_range(0..self.points);
            let src = &self.data[pick * self.dimension..][..self.dimension];
            self.centroids[slot * self.dimension..][..self.dimension].copy_from_slice(src);
        }
    }

    /// One fused assignment + accumulation pass over all points.
    ///
    /// Returns `true` when no assignment changed (the convergence signal).
    fn assign(&mut self, map: &mut [u8]) -> bool {
        self.counts.fill(0);

        let mut converged = true;
        for pos in 0..self.points {
            let point = &self.data[pos * self.dimension..][..self.dimension];

            // Settled points keep their recorded assignment and skip the
            // scan; they still flow through the shared accumulation below.
            if self.settled[pos] <= self.settle_at {
                let mut chosen = 0u8;
                let mut closest = T::infinity();
                for centro in 0..self.k {
                    let centroid = &self.centroids[centro * self.dimension..][..self.dimension];
                    let d2 = squared_euclidean(centroid, point);
                    // Strict `<`: ties stay with the lowest-indexed centroid.
                    if d2 < closest {
                        closest = d2;
                        chosen = centro as u8;
                    }
                }

                if map[pos] != chosen {
                    converged = false;
                    let lb = pos.saturating_sub(self.invalidate_up_to);
                    let ub = pos.saturating_add(self.invalidate_up_to).min(self.points - 1);
                    for counter in &mut self.settled[lb..=ub] {
                        *counter = 0;
                    }
                }
                map[pos] = chosen;
            }

            self.settled[pos] = self.settled[pos].saturating_add(1);

            let id = usize::from(map[pos]);
            self.counts[id] += 1;
            let sum = &mut self.sums[id * self.dimension..][..self.dimension];
            if self.counts[id] == 1 {
                sum.copy_from_slice(point);
            } else {
                for (s, x) in sum.iter_mut().zip(point) {
                    *s = *s + *x;
                }
            }
        }
        converged
    }

    /// Move each non-empty centroid to the mean of its members.
    ///
    /// Empty centroids keep their previous coordinates untouched: no
    /// reseeding, no removal.
    fn update(&mut self) {
        for centro in 0..self.k {
            let count = self.counts[centro];
            if count == 0 {
                continue;
            }
            // usize -> float never fails for the primitive float types.
            let total = T::from(count).expect("member count representable as float");
            let base = centro * self.dimension;
            for dim in 0..self.dimension {
                self.centroids[base + dim] = self.sums[base + dim] / total;
            }
        }
    }

    /// Drive assignment + update until a pass records zero changes, or until
    /// `max_iter` passes have run.
    fn run(&mut self, map: &mut [u8], max_iter: Option<usize>) -> FitStatus {
        let mut iterations = 0;
        loop {
            let converged = self.assign(map);
            self.update();
            iterations += 1;

            if converged {
                return FitStatus {
                    iterations,
                    converged: true,
                };
            }
            if let Some(cap) = max_iter {
                if iterations >= cap {
                    return FitStatus {
                        iterations,
                        converged: false,
                    };
                }
            }
        }
    }
}
