//! Uniform X-Y grid for neighbor candidate lookup.

use conduit_core::types::collections::FxHashMap;
use conduit_core::types::Point3;
use smallvec::SmallVec;

/// Buckets point indices by X-Y cell. With a cell size equal to the search
/// radius, every point within that radius lies in the 3×3 block around the
/// query cell.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: FxHashMap<(i64, i64), SmallVec<[usize; 8]>>,
}

impl SpatialGrid {
    pub fn build<I>(points: I, cell_size: f64) -> Self
    where
        I: IntoIterator<Item = Point3>,
    {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        let mut cells: FxHashMap<(i64, i64), SmallVec<[usize; 8]>> = FxHashMap::default();
        for (idx, point) in points.into_iter().enumerate() {
            cells.entry(cell_of(&point, cell_size)).or_default().push(idx);
        }
        Self { cell_size, cells }
    }

    /// Indices in the 3×3 block of cells around `point`.
    pub fn nearby(&self, point: &Point3) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = cell_of(point, self.cell_size);
        (-1i64..=1)
            .flat_map(move |dx| (-1i64..=1).map(move |dy| (cx.saturating_add(dx), cy.saturating_add(dy))))
            .filter_map(move |key| self.cells.get(&key))
            .flat_map(|bucket| bucket.iter().copied())
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

fn cell_of(point: &Point3, cell_size: f64) -> (i64, i64) {
    (
        (point.x / cell_size).floor() as i64,
        (point.y / cell_size).floor() as i64,
    )
}
