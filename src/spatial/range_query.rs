/// Anything with a position in the simulation plane.
pub trait Located {
    fn location(&self) -> (f64, f64);
}

impl Located for (f64, f64) {
    fn location(&self) -> (f64, f64) {
        *self
    }
}

/// A circular search region.
///
/// The tree prunes with the full `radius`, but membership is decided with half
/// of it: a point is contained when its squared distance to the center is
/// below `0.25 * radius²`.
///
/// # Examples
///
/// ```
/// use rs_particle_swarm::spatial::RangeQuery;
///
/// let range = RangeQuery::new(0.0, 0.0, 200.0);
/// assert!(range.contains(&(99.0, 0.0)));
/// assert!(!range.contains(&(100.0, 0.0))); // effective radius is 100, exclusive
/// assert!(!range.contains(&(150.0, 0.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeQuery {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl RangeQuery {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// A query of the given radius centered on `item`.
    pub fn around<P: Located>(item: &P, radius: f64) -> Self {
        let (x, y) = item.location();
        Self::new(x, y, radius)
    }

    /// Radius actually used by [`RangeQuery::contains`].
    pub fn effective_radius(&self) -> f64 {
        0.5 * self.radius
    }

    pub fn contains<P: Located>(&self, item: &P) -> bool {
        let (px, py) = item.location();
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy < 0.25 * self.radius * self.radius
    }
}
