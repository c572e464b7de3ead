use super::*;

/// An ordered, fixed-size collection of clusters.
///
/// Built once by seeding (see [`Seeding`]) and kept for a whole clustering
/// run. Indices are stable: they are what [`ClusterSet::nearest`] and
/// [`ClusterSet::neighbour`] return and what the projections are ordered by.
#[derive(Debug)]
pub struct ClusterSet<'a, O> {
    clusters: Vec<Cluster<'a, O>>,
}

impl<'a, O> ClusterSet<'a, O> {
    pub fn len(&self) -> usize {
        self.clusters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster<'a, O>> {
        self.clusters.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cluster<'a, O>> {
        self.clusters.iter_mut()
    }
    /// Centers in cluster index order.
    pub fn centers(&self) -> impl Iterator<Item = &[Energy]> + '_ {
        self.clusters.iter().map(Cluster::center)
    }
    /// Clears every cluster's membership. Centers are kept.
    pub fn reset(&mut self) {
        self.clusters.iter_mut().for_each(Cluster::reset);
    }
    /// The `d`-th coordinate of each center, in cluster index order.
    pub fn centers_in_dimension(&self, d: usize) -> Result<Vec<Energy>> {
        self.centers()
            .map(|c| {
                c.get(d).copied().ok_or(ClusterError::OutOfRange {
                    index: d,
                    len: c.len(),
                })
            })
            .collect()
    }
}

impl<'a, O> ClusterSet<'a, O>
where
    O: Observation,
{
    /// Index of the cluster whose center is closest. Ties go to the lowest index.
    pub fn nearest<P>(&self, observation: &P) -> Result<usize>
    where
        P: Observation + ?Sized,
    {
        self.closest(observation, None)?
            .map(|(j, _)| j)
            .ok_or(ClusterError::NoClusters)
    }

    /// Closest cluster other than `exclude`, with its squared distance.
    ///
    /// Centers are read as they are now. Nothing is recentered first, so
    /// call [`ClusterSet::recenter`] beforehand if fresh centers are wanted.
    pub fn neighbour<P>(&self, observation: &P, exclude: usize) -> Result<(usize, Energy)>
    where
        P: Observation + ?Sized,
    {
        let clusters = self.len();
        if clusters < 2 {
            return Err(ClusterError::NoNeighbour { clusters });
        }
        if exclude >= clusters {
            return Err(ClusterError::OutOfRange {
                index: exclude,
                len: clusters,
            });
        }
        self.closest(observation, Some(exclude))?
            .ok_or(ClusterError::NoNeighbour { clusters })
    }

    /// Appends the observation to its nearest cluster and returns that index.
    pub fn assign(&mut self, observation: &'a O) -> Result<usize> {
        let j = self.nearest(observation)?;
        self.clusters[j].append(observation);
        Ok(j)
    }

    /// Recenters every cluster. Empty clusters keep their centers.
    pub fn recenter(&mut self) -> Result<()> {
        self.clusters.iter_mut().try_for_each(Cluster::recenter)
    }

    /// Sum of the clusters' inertias.
    pub fn inertia(&self) -> Result<Energy> {
        self.clusters.iter().map(Cluster::inertia).sum()
    }

    /// Root of the weight-averaged squared distance from members to their centers.
    pub fn rms(&self) -> Result<Energy> {
        let mass = self.clusters.iter().map(Cluster::weight).sum::<Weight>();
        if mass == 0 {
            return Err(ClusterError::EmptyInput);
        }
        Ok((self.inertia()? / mass as Energy).sqrt())
    }

    /// Linear scan for the minimum distance, skipping `exclude`.
    fn closest<P>(&self, observation: &P, exclude: Option<usize>) -> Result<Option<(usize, Energy)>>
    where
        P: Observation + ?Sized,
    {
        let mut best = None::<(usize, Energy)>;
        for (j, cluster) in self.clusters.iter().enumerate() {
            if Some(j) == exclude {
                continue;
            }
            let d = distance(observation.coordinates(), cluster.center())?;
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((j, d));
            }
        }
        Ok(best)
    }
}

impl<'a, O> From<Vec<Cluster<'a, O>>> for ClusterSet<'a, O> {
    fn from(clusters: Vec<Cluster<'a, O>>) -> Self {
        Self { clusters }
    }
}

impl<O> Clone for ClusterSet<'_, O> {
    fn clone(&self) -> Self {
        Self {
            clusters: self.clusters.clone(),
        }
    }
}

impl<'a, O> std::ops::Index<usize> for ClusterSet<'a, O> {
    type Output = Cluster<'a, O>;
    fn index(&self, j: usize) -> &Self::Output {
        &self.clusters[j]
    }
}

impl<'a, O> std::ops::IndexMut<usize> for ClusterSet<'a, O> {
    fn index_mut(&mut self, j: usize) -> &mut Self::Output {
        &mut self.clusters[j]
    }
}

impl<'s, 'a, O> IntoIterator for &'s ClusterSet<'a, O> {
    type Item = &'s Cluster<'a, O>;
    type IntoIter = std::slice::Iter<'s, Cluster<'a, O>>;
    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

impl<'a, O> IntoIterator for ClusterSet<'a, O> {
    type Item = Cluster<'a, O>;
    type IntoIter = std::vec::IntoIter<Cluster<'a, O>>;
    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two clusters around (1, 1) and (4, 2.5), built by hand.
    fn pair<'a>(points: &'a [Point]) -> ClusterSet<'a, Point> {
        let mut set = ClusterSet::from(vec![
            Cluster::new(points[0].coordinates().to_vec()),
            Cluster::new(points[1].coordinates().to_vec()),
        ]);
        set[0].append(&points[0]);
        set[1].append(&points[1]);
        set[1].append(&points[2]);
        set.recenter().unwrap();
        set
    }

    #[test]
    fn nearest_picks_closest_center() {
        let points = triple();
        let set = pair(&points);
        assert_eq!(set.centers_in_dimension(0), Ok(vec![1., 4.]));
        assert_eq!(set.centers_in_dimension(1), Ok(vec![1., 2.5]));
        assert_eq!(set.nearest(&points[1]), Ok(1));
        assert_eq!(set.nearest(&points[0]), Ok(0));
    }

    #[test]
    fn nearest_breaks_ties_low() {
        let set = ClusterSet::<Point>::from(vec![
            Cluster::new(vec![0., 0.]),
            Cluster::new(vec![2., 0.]),
            Cluster::new(vec![2., 0.]),
        ]);
        assert_eq!(set.nearest(&Point::from(vec![1., 0.])), Ok(0));
        assert_eq!(set.nearest(&Point::from(vec![3., 0.])), Ok(1));
    }

    #[test]
    fn nearest_on_nothing() {
        let set = ClusterSet::<Point>::from(vec![]);
        assert_eq!(
            set.nearest(&Point::from(vec![0.])),
            Err(ClusterError::NoClusters)
        );
    }

    #[test]
    fn neighbour_skips_excluded() {
        let points = triple();
        let set = pair(&points);
        assert_eq!(set.neighbour(&points[0], 0), Ok((1, 11.25)));
        assert_eq!(set.neighbour(&points[1], 1), Ok((0, 5.)));
    }

    #[test]
    fn neighbour_reads_stale_centers() {
        let points = triple();
        let mut set = pair(&points);
        set.reset();
        set[1].append(&points[2]);
        assert_eq!(set.neighbour(&points[0], 0), Ok((1, 11.25)));
        set.recenter().unwrap();
        assert_eq!(set.neighbour(&points[0], 0), Ok((1, 20.)));
    }

    #[test]
    fn neighbour_needs_two() {
        let set = ClusterSet::<Point>::from(vec![Cluster::new(vec![0.])]);
        assert_eq!(
            set.neighbour(&Point::from(vec![1.]), 0),
            Err(ClusterError::NoNeighbour { clusters: 1 })
        );
        let points = triple();
        let set = pair(&points);
        assert_eq!(
            set.neighbour(&points[0], 2),
            Err(ClusterError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn projections_follow_order() {
        let points = triple();
        let set = pair(&points);
        assert_eq!(set[1].points_in_dimension(0), Ok(vec![3., 5.]));
        assert_eq!(
            set.centers_in_dimension(2),
            Err(ClusterError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn reset_empties_every_cluster() {
        let points = triple();
        let mut set = pair(&points);
        set.reset();
        assert!(set.iter().all(Cluster::is_empty));
        assert_eq!(set.centers_in_dimension(0), Ok(vec![1., 4.]));
    }

    #[test]
    fn assign_appends_to_nearest() {
        let points = triple();
        let mut set = ClusterSet::from(vec![
            Cluster::new(vec![1., 1.]),
            Cluster::new(vec![4., 2.5]),
        ]);
        let assigned = points
            .iter()
            .map(|p| set.assign(p))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(assigned, vec![0, 1, 1]);
        assert_eq!(set[1].len(), 2);
    }

    #[test]
    fn rms_over_members() {
        let points = triple();
        let set = pair(&points);
        // (3,2) and (5,3) sit 1.25 away from (4, 2.5); (1,1) sits on its center
        assert_eq!(set.inertia(), Ok(2.5));
        assert_eq!(set.rms(), Ok((2.5f64 / 3.).sqrt()));
        let empty = ClusterSet::<Point>::from(vec![Cluster::new(vec![0.])]);
        assert_eq!(empty.rms(), Err(ClusterError::EmptyInput));
    }
}
