use super::*;

/// A weighted point in n-dimensional space.
///
/// Implementors are read-only once built: clusters borrow them as members
/// and never copy or mutate their coordinates. Weight is a relative
/// importance (e.g. a pre-aggregated duplicate count) and is always at least 1.
pub trait Observation {
    /// Position of the point.
    fn coordinates(&self) -> &[Energy];
    /// Relative importance of the point, never zero.
    fn weight(&self) -> Weight;
    /// Dimensionality of the point.
    fn dimensions(&self) -> usize {
        self.coordinates().len()
    }
}

impl<O> Observation for &O
where
    O: Observation + ?Sized,
{
    fn coordinates(&self) -> &[Energy] {
        (**self).coordinates()
    }
    fn weight(&self) -> Weight {
        (**self).weight()
    }
}

/// Default `Observation`: owned coordinates with an integer weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Coordinates,
    weight: Weight,
}

impl Point {
    /// Non-positive weights are clamped to 1 rather than rejected.
    pub fn new(coordinates: Coordinates, weight: i64) -> Self {
        Self {
            coordinates,
            weight: weight.max(1) as Weight,
        }
    }
}

impl Observation for Point {
    fn coordinates(&self) -> &[Energy] {
        &self.coordinates
    }
    fn weight(&self) -> Weight {
        self.weight
    }
}

impl From<Coordinates> for Point {
    fn from(coordinates: Coordinates) -> Self {
        Self::new(coordinates, 1)
    }
}

impl From<(Coordinates, i64)> for Point {
    fn from((coordinates, weight): (Coordinates, i64)) -> Self {
        Self::new(coordinates, weight)
    }
}

/// Planar point in the unit square with a small random weight.
impl Arbitrary for Point {
    fn random() -> Self {
        let coordinates = (0..2).map(|_| rand::random::<Energy>()).collect();
        Self::new(coordinates, rand::random_range(1..=4))
    }
}

/// Weighted centroid of a collection of observations.
pub fn centroid<'a, O, I>(observations: I) -> Result<Coordinates>
where
    O: Observation + ?Sized + 'a,
    I: IntoIterator<Item = &'a O>,
{
    mean(
        observations
            .into_iter()
            .map(|o| (o.coordinates(), o.weight())),
    )
}

/// Weighted mean distance from `target` to each of `others`.
///
/// Anything coincident with the target (distance exactly zero) is skipped
/// and adds nothing to the denominator. With nothing left, returns 0.
pub fn average_distance<'a, O, P, I>(target: &O, others: I) -> Result<Energy>
where
    O: Observation + ?Sized,
    P: Observation + ?Sized + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut total = 0.;
    let mut mass = 0.;
    for other in others {
        let d = distance(target.coordinates(), other.coordinates())?;
        if d == 0. {
            continue;
        }
        let w = other.weight() as Energy;
        total += d * w;
        mass += w;
    }
    if mass == 0. {
        Ok(0.)
    } else {
        Ok(total / mass)
    }
}
