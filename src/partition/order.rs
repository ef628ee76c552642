use crate::partition::grid::Partition;
use kurbo::{Point, Vec2};
use rand::Rng;
use rand::seq::SliceRandom;

/// How a partition's playback order is arranged, applied once after
/// construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderPolicy {
    /// Row-major order, unchanged.
    #[default]
    Identity,
    /// Uniform random permutation of the full cell sequence.
    Shuffled,
    /// Even rows left-to-right, odd rows right-to-left.
    Serpentine,
    /// Cells ordered by the first hit of an Archimedean spiral walked from
    /// the image center outward; unhit cells keep their relative order at
    /// the end.
    Spiral,
}

/// Angular increment of the spiral walk, in radians.
const SPIRAL_STEP: f64 = 0.05;

/// Apply `policy` to the partition's playback order.
///
/// The random source is injected so shuffled orders are reproducible under a
/// seeded rng.
pub(crate) fn apply_order(partition: &mut Partition, policy: ReorderPolicy, rng: &mut impl Rng) {
    let order = match policy {
        ReorderPolicy::Identity => return,
        ReorderPolicy::Shuffled => {
            let mut order: Vec<u32> = (0..partition.cell_count()).collect();
            order.shuffle(rng);
            order
        }
        ReorderPolicy::Serpentine => serpentine_order(partition.cols(), partition.rows()),
        ReorderPolicy::Spiral => spiral_order(partition),
    };
    partition.set_order(order);
}

fn serpentine_order(cols: u32, rows: u32) -> Vec<u32> {
    let mut order = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        let base = row * cols;
        if row % 2 == 0 {
            order.extend(base..base + cols);
        } else {
            order.extend((base..base + cols).rev());
        }
    }
    order
}

/// Walk an Archimedean spiral from the center outward in fixed angular
/// increments and record cells in first-hit order. Samples falling outside
/// the image are discarded; cells the walk never touches are appended in
/// construction order.
fn spiral_order(partition: &Partition) -> Vec<u32> {
    let count = partition.cell_count();
    let center = Point::new(
        f64::from(partition.width()) * 0.5,
        f64::from(partition.height()) * 0.5,
    );
    // One cell extent of radial growth per turn, so every ring of cells is
    // crossed by an arm.
    let growth = f64::from(partition.extent()) / std::f64::consts::TAU;
    let max_radius = Vec2::new(center.x, center.y).hypot();

    let mut seen = vec![false; count as usize];
    let mut order = Vec::with_capacity(count as usize);
    let mut theta = 0.0f64;
    while growth * theta <= max_radius {
        let r = growth * theta;
        let p = center + Vec2::new(r * theta.cos(), r * theta.sin());
        theta += SPIRAL_STEP;
        if p.x < 0.0
            || p.y < 0.0
            || p.x >= f64::from(partition.width())
            || p.y >= f64::from(partition.height())
        {
            continue;
        }
        let col = p.x as u32 / partition.extent();
        let row = p.y as u32 / partition.extent();
        let idx = row * partition.cols() + col;
        if !seen[idx as usize] {
            seen[idx as usize] = true;
            order.push(idx);
        }
    }
    order.extend((0..count).filter(|&i| !seen[i as usize]));
    order
}

#[cfg(test)]
#[path = "../../tests/unit/partition/order.rs"]
mod tests;
