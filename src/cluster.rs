use super::*;

/// A single cluster: one center and the observations currently assigned to it.
///
/// Members are borrowed from the caller's collection and kept in insertion
/// order. The center only moves through [`Cluster::recenter`] or seeding.
#[derive(Debug)]
pub struct Cluster<'a, O> {
    center: Coordinates,
    members: Vec<&'a O>,
}

impl<'a, O> Cluster<'a, O> {
    /// An empty cluster around the given center.
    pub fn new(center: Coordinates) -> Self {
        Self {
            center,
            members: Vec::new(),
        }
    }
    pub fn center(&self) -> &[Energy] {
        &self.center
    }
    pub fn members(&self) -> &[&'a O] {
        &self.members
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    /// Adds a member at the end.
    pub fn append(&mut self, observation: &'a O) {
        self.members.push(observation);
    }
    /// Drops all members. The center stays where it is.
    pub fn reset(&mut self) {
        self.members.clear();
    }
}

impl<'a, O> Cluster<'a, O>
where
    O: Observation,
{
    /// Total weight of the members.
    pub fn weight(&self) -> Weight {
        self.members.iter().map(|o| o.weight()).sum()
    }

    /// Moves the center to the weighted mean of the members.
    ///
    /// An empty cluster keeps its previous center so it stays usable for
    /// nearest lookups. On error the center is left untouched.
    pub fn recenter(&mut self) -> Result<()> {
        if self.members.is_empty() {
            return Ok(());
        }
        self.center = centroid(self.members.iter().copied())?;
        Ok(())
    }

    /// The `d`-th coordinate of every member, in insertion order.
    pub fn points_in_dimension(&self, d: usize) -> Result<Vec<Energy>> {
        self.members
            .iter()
            .map(|o| {
                o.coordinates()
                    .get(d)
                    .copied()
                    .ok_or(ClusterError::OutOfRange {
                        index: d,
                        len: o.dimensions(),
                    })
            })
            .collect()
    }

    /// Weighted sum of squared member distances to the center.
    pub fn inertia(&self) -> Result<Energy> {
        self.members
            .iter()
            .map(|o| distance(o.coordinates(), &self.center).map(|d| d * o.weight() as Energy))
            .sum()
    }
}

impl<O> Clone for Cluster<'_, O> {
    fn clone(&self) -> Self {
        Self {
            center: self.center.clone(),
            members: self.members.clone(),
        }
    }
}

impl<O> From<Coordinates> for Cluster<'_, O> {
    fn from(center: Coordinates) -> Self {
        Self::new(center)
    }
}
