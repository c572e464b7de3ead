use super::*;

/// Squared Euclidean distance between two coordinate vectors.
///
/// The square root is omitted: nearest-center selection and convergence
/// checks only compare distances, so the ordering is all that matters.
/// Take the root yourself before reporting this as a true length.
pub fn distance(a: &[Energy], b: &[Energy]) -> Result<Energy> {
    if a.len() != b.len() {
        return Err(ClusterError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| x - y)
        .map(|d| d * d)
        .sum::<Energy>())
}

/// Weighted arithmetic mean, per dimension: Σ(value · weight) / Σ(weight).
///
/// Fails on an empty input (or one with no weighted mass), and on
/// points that disagree on dimensionality.
pub fn mean<'a, I>(points: I) -> Result<Coordinates>
where
    I: IntoIterator<Item = (&'a [Energy], Weight)>,
{
    let mut points = points.into_iter().peekable();
    let n = points
        .peek()
        .map(|(coordinates, _)| coordinates.len())
        .ok_or(ClusterError::EmptyInput)?;
    let mut sums = vec![0.; n];
    let mut mass = 0.;
    for (coordinates, weight) in points {
        if coordinates.len() != n {
            return Err(ClusterError::DimensionMismatch {
                expected: n,
                found: coordinates.len(),
            });
        }
        let weight = weight as Energy;
        sums.iter_mut()
            .zip(coordinates.iter())
            .for_each(|(sum, x)| *sum += x * weight);
        mass += weight;
    }
    if mass == 0. {
        return Err(ClusterError::EmptyInput);
    }
    Ok(sums.into_iter().map(|sum| sum / mass).collect())
}
