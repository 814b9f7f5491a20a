use crate::error::SolveError;
use serde::Serialize;

/// An ordered sequence of states stored as one flat row-major buffer:
/// all coordinates of point 0, then point 1, and so on.
///
/// Index order is temporal order; point `i` is the state after `i` steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    dim: usize,
    dt: f64,
    values: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn from_raw(dim: usize, dt: f64, values: Vec<f64>) -> Self {
        debug_assert!(dim > 0 && values.len() % dim == 0);
        Self { dim, dt, values }
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of points (steps + 1).
    pub fn len(&self) -> usize {
        self.values.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dim)?;
        let end = start.checked_add(self.dim)?;
        self.values.get(start..end)
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.dim)
    }

    /// Time of point `index`, measured from the initial state.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    /// Time of every point, in order.
    pub fn times(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.time_at(i)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// True when stepping overflowed somewhere along the trajectory.
    pub fn has_non_finite(&self) -> bool {
        self.values.iter().any(|v| !v.is_finite())
    }

    /// Flat xyz buffer for 3D display. Planar systems get a zero third coordinate
    /// on every point.
    pub fn to_display_points(&self) -> Vec<f64> {
        pad_to_xyz(&self.values, self.dim)
    }
}

/// Regroups a flat solver buffer of `dim`-wide points into a flat xyz buffer.
pub fn display_points(flat: &[f64], dim: usize) -> Result<Vec<f64>, SolveError> {
    if dim != 2 && dim != 3 {
        return Err(SolveError::UnsupportedDimension(dim));
    }
    if flat.len() % dim != 0 {
        return Err(SolveError::invalid(
            "flat",
            format!(
                "buffer length {} is not a multiple of dimension {}",
                flat.len(),
                dim
            ),
        ));
    }
    Ok(pad_to_xyz(flat, dim))
}

fn pad_to_xyz(flat: &[f64], dim: usize) -> Vec<f64> {
    if dim == 3 {
        return flat.to_vec();
    }
    // dim == 2
    let mut out = Vec::with_capacity(flat.len() / dim * 3);
    for point in flat.chunks_exact(dim) {
        out.extend_from_slice(point);
        out.push(0.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planar() -> Trajectory {
        Trajectory::from_raw(2, 0.5, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    }

    #[test]
    fn points_are_grouped_by_dimension() {
        let trajectory = planar();
        assert_eq!(trajectory.len(), 3);
        let points: Vec<&[f64]> = trajectory.points().collect();
        assert_eq!(points, vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);
        assert_eq!(trajectory.point(1), Some(&[3.0, 4.0][..]));
        assert_eq!(trajectory.point(3), None);
        assert!((trajectory.time_at(2) - 1.0).abs() < 1e-15);
        assert_eq!(trajectory.times(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn point_out_of_range_returns_none_without_overflow() {
        let trajectory = Trajectory::from_raw(3, 0.1, vec![0.0; 6]);
        assert_eq!(trajectory.point(usize::MAX / 3), None);
        assert_eq!(trajectory.point(usize::MAX), None);
        assert_eq!(trajectory.point(2), None);
    }

    #[test]
    fn planar_display_points_get_one_trailing_zero_each() {
        let xyz = planar().to_display_points();
        assert_eq!(xyz, vec![1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0, 0.0]);
    }

    #[test]
    fn spatial_display_points_are_unchanged() {
        let flat = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(display_points(&flat, 3).expect("xyz"), flat);
    }

    #[test]
    fn display_points_rejects_bad_shapes() {
        assert_eq!(
            display_points(&[1.0, 2.0], 4),
            Err(SolveError::UnsupportedDimension(4))
        );
        let err = display_points(&[1.0, 2.0, 3.0], 2).expect_err("ragged buffer");
        assert!(err.to_string().starts_with("Invalid parameter"));
    }

    #[test]
    fn detects_non_finite_entries() {
        assert!(!planar().has_non_finite());
        let trajectory = Trajectory::from_raw(2, 0.1, vec![0.0, 1.0, f64::NAN, 2.0]);
        assert!(trajectory.has_non_finite());
    }
}
