use super::*;
use rand::Rng;
use std::collections::HashSet;

/// Strategy for choosing the initial centers of a [`ClusterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seeding {
    /// Distinct observations drawn uniformly at random.
    Uniform,
    /// Greedy farthest-point traversal from one random start.
    #[default]
    Spread,
    /// k-means++: draws proportional to weight times squared distance to the nearest center.
    PlusPlus,
}

impl Seeding {
    pub const fn all() -> [Self; 3] {
        [Self::Uniform, Self::Spread, Self::PlusPlus]
    }

    /// Builds `k` empty clusters around centers chosen by this strategy.
    pub fn seed<'a, O, R>(self, k: usize, observations: &'a [O], rng: &mut R) -> Result<ClusterSet<'a, O>>
    where
        O: Observation,
        R: Rng + ?Sized,
    {
        match self {
            Self::Uniform => ClusterSet::uniform(k, observations, rng),
            Self::Spread => ClusterSet::spread(k, observations, rng),
            Self::PlusPlus => ClusterSet::plusplus(k, observations, rng),
        }
    }

    /// Strategy named by the `KMEANS_SEEDING` environment variable, else the default.
    pub fn from_env() -> Self {
        let seeding = Self::resolve(std::env::var(SEEDING_ENV).ok().as_deref());
        log::info!("{:<32}{:<16}", "using kmeans seeding", seeding);
        seeding
    }

    /// Parses an optional setting, falling back to the default on absence or garbage.
    fn resolve(setting: Option<&str>) -> Self {
        match setting.map(Self::try_from) {
            None => Self::default(),
            Some(Ok(seeding)) => seeding,
            Some(Err(e)) => {
                log::warn!("{}, using {}", e, Self::default());
                Self::default()
            }
        }
    }
}

impl TryFrom<&str> for Seeding {
    type Error = ClusterError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Ok(Self::Uniform),
            "spread" | "farapart" | "far-apart" => Ok(Self::Spread),
            "plusplus" | "kmeans++" | "++" => Ok(Self::PlusPlus),
            _ => Err(ClusterError::UnknownSeeding(s.to_string())),
        }
    }
}

impl std::str::FromStr for Seeding {
    type Err = ClusterError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Seeding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Spread => write!(f, "spread"),
            Self::PlusPlus => write!(f, "plusplus"),
        }
    }
}

impl<'a, O> ClusterSet<'a, O>
where
    O: Observation,
{
    /// Uniform seeding.
    ///
    /// Walks a random permutation of the observations and keeps each one
    /// whose location is not already a center, until `k` are kept.
    pub fn uniform<R>(k: usize, observations: &'a [O], rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        use rand::seq::SliceRandom;
        Self::validate(k, observations)?;
        log::debug!("{:<32}{:<16}{:<8}{:<8}", "seeding kmeans", Seeding::Uniform, k, observations.len());
        let mut order = (0..observations.len()).collect::<Vec<_>>();
        order.shuffle(rng);
        let mut seen = HashSet::with_capacity(k);
        let chosen = order
            .into_iter()
            .filter(|&i| seen.insert(location(observations[i].coordinates())))
            .take(k)
            .inspect(|i| log::trace!("{:<32}{:<8}", "uniform center", i))
            .collect::<Vec<_>>();
        Ok(Self::around(&chosen, observations))
    }

    /// Farthest-point seeding.
    ///
    /// The first center is uniform at random. Every later center is the
    /// unchosen observation farthest from its nearest chosen center, ties
    /// going to the lowest index. Centers come out pairwise distinct.
    pub fn spread<R>(k: usize, observations: &'a [O], rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        Self::validate(k, observations)?;
        log::debug!("{:<32}{:<16}{:<8}{:<8}", "seeding kmeans", Seeding::Spread, k, observations.len());
        let n = observations.len();
        let mut taken = vec![false; n];
        let mut nearest = vec![Energy::INFINITY; n];
        let mut chosen = Vec::with_capacity(k);
        let mut next = rng.random_range(0..n);
        loop {
            log::trace!("{:<32}{:<8}", "spread center", next);
            taken[next] = true;
            chosen.push(next);
            if chosen.len() == k {
                break;
            }
            let ref center = observations[next];
            for (d, o) in nearest.iter_mut().zip(observations.iter()) {
                *d = Energy::min(*d, distance(o.coordinates(), center.coordinates())?);
            }
            next = (0..n)
                .filter(|&i| !taken[i])
                .fold(None::<usize>, |best, i| match best {
                    Some(b) if nearest[i] <= nearest[b] => Some(b),
                    _ => Some(i),
                })
                .ok_or(ClusterError::InvalidClusterCount { k, available: chosen.len() })?;
        }
        Ok(Self::around(&chosen, observations))
    }

    /// Weighted k-means++ seeding.
    ///
    /// 1. choose the 1st center with probability proportional to weight
    /// 2. choose each next center proportional to weight × squared distance to its nearest center
    pub fn plusplus<R>(k: usize, observations: &'a [O], rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        use rand::distr::Distribution;
        use rand::distr::weighted::WeightedIndex;
        Self::validate(k, observations)?;
        log::debug!("{:<32}{:<16}{:<8}{:<8}", "seeding kmeans", Seeding::PlusPlus, k, observations.len());
        let mut potentials = observations
            .iter()
            .map(|o| o.weight() as Energy)
            .collect::<Vec<Energy>>();
        let mut nearest = vec![Energy::INFINITY; observations.len()];
        let mut chosen = Vec::with_capacity(k);
        while chosen.len() < k {
            if !potentials.iter().all(|p| p.is_finite()) {
                return Err(ClusterError::NonFinite);
            }
            let i = WeightedIndex::new(potentials.iter())
                .map_err(|_| ClusterError::InvalidClusterCount { k, available: chosen.len() })?
                .sample(rng);
            log::trace!("{:<32}{:<8}", "plusplus center", i);
            chosen.push(i);
            let ref center = observations[i];
            for ((d, p), o) in nearest
                .iter_mut()
                .zip(potentials.iter_mut())
                .zip(observations.iter())
            {
                *d = Energy::min(*d, distance(o.coordinates(), center.coordinates())?);
                *p = *d * o.weight() as Energy;
            }
        }
        Ok(Self::around(&chosen, observations))
    }

    /// Rejects `k` of zero or beyond the number of distinct locations,
    /// and observations that disagree on dimensionality.
    fn validate(k: usize, observations: &[O]) -> Result<()> {
        if let Some(first) = observations.first() {
            let expected = first.dimensions();
            if let Some(o) = observations.iter().find(|o| o.dimensions() != expected) {
                return Err(ClusterError::DimensionMismatch {
                    expected,
                    found: o.dimensions(),
                });
            }
        }
        let available = observations
            .iter()
            .map(|o| location(o.coordinates()))
            .collect::<HashSet<_>>()
            .len();
        if k == 0 || k > available {
            return Err(ClusterError::InvalidClusterCount { k, available });
        }
        Ok(())
    }

    /// Empty clusters centered on the chosen observations, in pick order.
    fn around(chosen: &[usize], observations: &[O]) -> Self {
        chosen
            .iter()
            .map(|&i| Cluster::new(observations[i].coordinates().to_vec()))
            .collect::<Vec<_>>()
            .into()
    }
}

/// Hashable identity of a position. Negative zero folds into zero.
fn location(coordinates: &[Energy]) -> Vec<u64> {
    coordinates.iter().map(|x| (x + 0.).to_bits()).collect()
}
