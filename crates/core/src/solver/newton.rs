//! Newton–Raphson root finding with a numerical derivative
//!
//! Generic scalar kernel for the target-humidity inversion. Non-convergence
//! is a first-class result, not a silent last iterate: exhausting the
//! iteration cap or hitting a vanishing derivative returns a tagged error
//! carrying the best estimate, and the caller decides what to do with it.

use std::fmt;
use tracing::{debug, warn};

/// Step used for the central-difference derivative
const DERIVATIVE_STEP: f64 = 1e-6;

/// Derivatives smaller than this cannot produce a meaningful Newton step
const DERIVATIVE_FLOOR: f64 = 1e-12;

/// Root-finding failure conditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// Iteration cap exhausted before either convergence criterion was met
    NonConvergence { last_estimate: f64, iterations: usize },
    /// The derivative vanished near the current iterate
    DerivativeVanished { at: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NonConvergence {
                last_estimate,
                iterations,
            } => write!(
                f,
                "no convergence after {iterations} iterations (last estimate {last_estimate})"
            ),
            SolveError::DerivativeVanished { at } => {
                write!(f, "derivative vanished near x = {at}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Find a root of `f` starting from `initial_guess`.
///
/// Converges when `|f(x)| < tolerance` or the step shrinks below
/// `tolerance`, whichever happens first; gives up after `max_iterations`.
pub fn find_root<F>(
    f: F,
    initial_guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, SolveError>
where
    F: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    for iteration in 0..max_iterations {
        let fx = f(x);
        if fx.abs() < tolerance {
            debug!(iteration, root = x, "newton converged on residual");
            return Ok(x);
        }

        let derivative = (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP))
            / (2.0 * DERIVATIVE_STEP);
        if derivative.abs() < DERIVATIVE_FLOOR {
            warn!(at = x, "newton derivative vanished");
            return Err(SolveError::DerivativeVanished { at: x });
        }

        let step = fx / derivative;
        x -= step;
        if step.abs() < tolerance {
            debug!(iteration, root = x, "newton converged on step size");
            return Ok(x);
        }
    }
    warn!(
        last_estimate = x,
        max_iterations, "newton exhausted iteration cap"
    );
    Err(SolveError::NonConvergence {
        last_estimate: x,
        iterations: max_iterations,
    })
}
