//! The iterative stress-majorization solver.

use crate::components::Component;
use crate::options::{Dimension, StressOptions};
use crate::pipeline::CancellationToken;
use nalgebra::DMatrix;
use selkie_graphlib::Point;

/// Position solver for one connected component.
///
/// Construction derives the weight matrix from the component's shortest-path
/// distances and caches the termination configuration; [`execute`] then
/// sweeps all non-fixed nodes, replacing each position with the weighted
/// average of `p_v + d_uv * (p_u - p_v) / |p_u - p_v|` over all other
/// nodes, until the relative stress improvement drops below `epsilon` or
/// the iteration limit fires.
///
/// [`execute`]: StressMajorization::execute
pub struct StressMajorization<'a> {
    comp: &'a mut Component,
    distances: DMatrix<f64>,
    weights: DMatrix<f64>,
    dimension: Dimension,
    epsilon: f64,
    iteration_limit: usize,
}

impl<'a> StressMajorization<'a> {
    /// Weight matrix `w_ij = 1 / d_ij^2`; the diagonal stays unused. The
    /// iteration limit is clamped to at least one here, not in the loop.
    pub fn new(comp: &'a mut Component, distances: DMatrix<f64>, opts: &StressOptions) -> Self {
        let n = comp.nodes.len();
        let mut weights = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let d = distances[(i, j)];
                    weights[(i, j)] = 1.0 / (d * d);
                }
            }
        }

        Self {
            comp,
            distances,
            weights,
            dimension: opts.dimension,
            epsilon: opts.epsilon,
            iteration_limit: opts.iteration_limit_clamped(),
        }
    }

    /// Runs majorization sweeps until a termination criterion fires.
    ///
    /// Trivial components (`n <= 1`) return immediately. The cancellation
    /// token is polled once per sweep; cancellation keeps the positions
    /// reached so far and is not an error.
    pub fn execute(&mut self, cancel: &dyn CancellationToken) {
        let n = self.comp.nodes.len();
        if n <= 1 {
            return;
        }

        let mut previous = self.compute_stress();
        let mut current = f64::INFINITY;
        let mut count = 0usize;

        loop {
            if cancel.is_canceled() {
                tracing::debug!(iterations = count, "stress majorization canceled");
                return;
            }
            if count > 0 {
                previous = current;
            }

            for u in 0..n {
                if self.comp.nodes[u].fixed {
                    continue;
                }
                // In-place update: later nodes of this sweep already see it
                // (Gauss-Seidel order).
                let position = self.new_position(u);
                self.comp.nodes[u].position = position;
            }

            current = self.compute_stress();
            count += 1;
            if self.done(count, previous, current) {
                break;
            }
        }

        tracing::debug!(
            nodes = n,
            iterations = count,
            stress = current,
            "stress majorization finished"
        );
    }

    /// Termination test, checked once per sweep in priority order:
    /// degenerate zero stress, relative improvement below epsilon, iteration
    /// limit. A non-positive epsilon never matches a non-negative
    /// improvement, leaving the iteration limit as the sole terminator.
    fn done(&self, count: usize, previous: f64, current: f64) -> bool {
        previous == 0.0
            || (previous - current) / previous < self.epsilon
            || count >= self.iteration_limit
    }

    fn new_position(&self, u: usize) -> Point {
        let pu = self.comp.nodes[u].position;
        let mut weight_sum = 0.0;
        let mut x_disp = 0.0;
        let mut y_disp = 0.0;

        for (v, node) in self.comp.nodes.iter().enumerate() {
            if v == u {
                continue;
            }
            let weight = self.weights[(u, v)];
            weight_sum += weight;

            let pv = node.position;
            let euc = pu.distance(pv);
            if euc == 0.0 {
                // Coincident points are expected right after seeding; they
                // define no direction and contribute no displacement.
                continue;
            }

            let d = self.distances[(u, v)];
            if self.dimension != Dimension::Y {
                x_disp += weight * (pv.x + d * (pu.x - pv.x) / euc);
            }
            if self.dimension != Dimension::X {
                y_disp += weight * (pv.y + d * (pu.y - pv.y) / euc);
            }
        }

        match self.dimension {
            Dimension::XY => Point::new(x_disp / weight_sum, y_disp / weight_sum),
            Dimension::X => Point::new(x_disp / weight_sum, pu.y),
            Dimension::Y => Point::new(pu.x, y_disp / weight_sum),
        }
    }

    /// The global stress `sum_{i<j} w_ij * (|p_i - p_j| - d_ij)^2`.
    fn compute_stress(&self) -> f64 {
        let n = self.comp.nodes.len();
        let mut stress = 0.0;
        for i in 0..n {
            let pi = self.comp.nodes[i].position;
            for j in (i + 1)..n {
                let euc = pi.distance(self.comp.nodes[j].position);
                let diff = euc - self.distances[(i, j)];
                stress += self.weights[(i, j)] * diff * diff;
            }
        }
        stress
    }
}
