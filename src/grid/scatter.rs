use rand::Rng;
use tracing::debug;

use super::{Cost, Grid, HEAVY_WEIGHT, LIGHT_WEIGHT};
use crate::errors::GridError;


impl<C: Cost> Grid<C> {

    /// Re-roll the wall flag of every cell except start and finish
    /// Each cell becomes a wall with probability `density`. Returns the number of walls placed.
    pub fn scatter_walls<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<usize, GridError> {
        check_density(density)?;

        let mut placed = 0;
        for node in self.nodes.iter_mut().filter(|n| !n.is_start && !n.is_finish) {
            node.is_wall = rng.random_bool(density);
            placed += usize::from(node.is_wall);
        }

        debug!(placed, density, "scattered walls");
        Ok(placed)
    }

    /// Re-roll the weight of every cell except start and finish
    /// Each cell becomes heavy with probability `density`, light otherwise. Returns the number of heavy cells.
    pub fn scatter_weights<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<usize, GridError> {
        check_density(density)?;

        let mut heavy = 0;
        for node in self.nodes.iter_mut().filter(|n| !n.is_start && !n.is_finish) {
            let is_heavy = rng.random_bool(density);
            node.weight = C::from(if is_heavy { HEAVY_WEIGHT } else { LIGHT_WEIGHT });
            heavy += usize::from(is_heavy);
        }

        debug!(heavy, density, "scattered weights");
        Ok(heavy)
    }
}

fn check_density(density: f64) -> Result<(), GridError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(GridError::InvalidDensity(density))
    }
}
