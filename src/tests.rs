use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Three unit-weight points: (1,1), (3,2), (5,3).
pub fn triple() -> Vec<Point> {
    vec![
        Point::from(vec![1., 1.]),
        Point::from(vec![3., 2.]),
        Point::from(vec![5., 3.]),
    ]
}

/// Eight unit-weight points scattered over a 21 × 19 box.
pub fn sparse() -> Vec<Point> {
    [
        [1., 1.],
        [3., 2.],
        [5., 3.],
        [10., 3.],
        [5., 19.],
        [21., 13.],
        [8., 9.],
        [7., 1.],
    ]
    .into_iter()
    .map(|xy| Point::from(xy.to_vec()))
    .collect()
}

/// Deterministic generator for reproducible seeding.
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// `n` planar points in the unit square with weights in 1..=4, reproducible by seed.
pub fn scatter(n: usize, seed: u64) -> Vec<Point> {
    let ref mut rng = rng(seed);
    (0..n)
        .map(|_| {
            let coordinates = vec![rng.random::<Energy>(), rng.random::<Energy>()];
            Point::new(coordinates, rng.random_range(1..=4))
        })
        .collect()
}

/// Sum of squared distances between consecutively indexed centers.
pub fn chain<O>(set: &ClusterSet<O>) -> Energy {
    set.centers()
        .zip(set.centers().skip(1))
        .map(|(a, b)| distance(a, b).expect("centers share dimensions"))
        .sum()
}

/// One assign-then-recenter pass, the way an outer loop drives it.
fn pass<'a>(set: &mut ClusterSet<'a, Point>, points: &'a [Point]) -> Result<Energy> {
    set.reset();
    for point in points {
        set.assign(point)?;
    }
    set.recenter()?;
    set.rms()
}

#[test]
fn refinement_settles() {
    let _ = env_logger::builder().is_test(true).try_init();
    let points = scatter(256, 17);
    for seeding in Seeding::all() {
        let ref mut rng = rng(99);
        let mut set = seeding.seed(8, &points, rng).unwrap();
        let mut losses = Vec::new();
        for _ in 0..16 {
            losses.push(pass(&mut set, &points).unwrap());
        }
        // Lloyd iterations never increase the weighted loss
        for window in losses.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-12,
                "rms increasing: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert_eq!(set.iter().map(Cluster::len).sum::<usize>(), points.len());
    }
}

#[test]
fn parallel_assignment_matches_serial() {
    use rayon::prelude::*;
    let points = scatter(512, 23);
    let ref mut rng = rng(5);
    let mut parallel = ClusterSet::spread(6, &points, rng).unwrap();
    let mut serial = parallel.clone();
    let nearest = points
        .par_iter()
        .map(|p| parallel.nearest(p))
        .collect::<Result<Vec<usize>>>()
        .unwrap();
    for (point, j) in points.iter().zip(nearest) {
        parallel[j].append(point);
    }
    for point in points.iter() {
        serial.assign(point).unwrap();
    }
    parallel.recenter().unwrap();
    serial.recenter().unwrap();
    assert!(parallel.centers().eq(serial.centers()));
    for j in 0..serial.len() {
        assert_eq!(parallel[j].points_in_dimension(0), serial[j].points_in_dimension(0));
    }
}

#[test]
fn weights_pull_centers() {
    let points = vec![
        Point::new(vec![0.], 1),
        Point::new(vec![4.], 3),
        Point::new(vec![100.], 1),
    ];
    let mut set = ClusterSet::from(vec![Cluster::new(vec![0.]), Cluster::new(vec![100.])]);
    pass(&mut set, &points).unwrap();
    assert_eq!(set.centers_in_dimension(0), Ok(vec![3., 100.]));
    assert_eq!(set.neighbour(&points[2], 1), Ok((0, 97. * 97.)));
}
