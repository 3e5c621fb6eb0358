//! Exact and accelerated k-means on a synthetic random dataset.
//!
//! Each assignment id is also rendered as the 8-bit grey value `id * (255 / k)`,
//! the mapping a greyscale image writer would use for the partition.

use lloyd::Kmeans;
use rand::prelude::*;

fn main() {
    let seed = 42;
    let num_points = 24;
    let num_dims = 4;
    let k = 4;
    let max_value = 250.0f32;

    // Uniform random points in [0, max_value)^num_dims.
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<Vec<f32>> = (0..num_points)
        .map(|_| (0..num_dims).map(|_| rng.random::<f32>() * max_value).collect())
        .collect();

    // --- Exact Lloyd iterations ---
    let fit = Kmeans::new(k).with_seed(seed).fit(&data).unwrap();
    println!("=== K-means exact (k={k}) ===");
    println!("converged in {} steps", fit.iterations);
    print_partition(&data, &fit.assignments, k);

    // --- Settling accelerator ---
    let fit = Kmeans::new(k)
        .with_seed(seed)
        .with_settle_at(2)
        .with_invalidation_window(1)
        .fit(&data)
        .unwrap();
    println!("\n=== K-means settling (k={k}, settle_at=2, window=1) ===");
    println!("converged in {} steps", fit.iterations);
    print_partition(&data, &fit.assignments, k);
}

fn print_partition(data: &[Vec<f32>], assignments: &[u8], k: usize) {
    let multiplier = u8::MAX / k as u8;
    for (i, &id) in assignments.iter().enumerate() {
        println!(
            "  point {i:2} ({:6.1}, {:6.1}, ...) => cluster {id} (grey {})",
            data[i][0],
            data[i][1],
            id * multiplier
        );
    }
}
