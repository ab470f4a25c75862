use thiserror::Error;

/// Errors from scalar root finding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindError {
    #[error("interval [{lo}, {hi}] does not bracket a root")]
    NoBracket { lo: f64, hi: f64 },

    #[error("derivative vanished at x = {x}")]
    DerivativeVanished { x: f64 },

    #[error("no convergence after {0} iterations")]
    MaxIterations(usize),
}

/// Bisection on a bracketing interval.
///
/// Requires `f(lo)` and `f(hi)` to have opposite signs. Converges
/// unconditionally, halving the interval each step.
pub fn bisect<F>(f: F, lo: f64, hi: f64, tol: f64, max_iter: usize) -> Result<f64, RootFindError>
where
    F: Fn(f64) -> f64,
{
    let mut lo = lo;
    let mut hi = hi;
    let mut flo = f(lo);
    if flo.abs() <= tol {
        return Ok(lo);
    }
    if f(hi).abs() <= tol {
        return Ok(hi);
    }
    if flo.signum() == f(hi).signum() {
        return Err(RootFindError::NoBracket { lo, hi });
    }
    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let fmid = f(mid);
        if fmid.abs() <= tol || 0.5 * (hi - lo).abs() <= tol {
            return Ok(mid);
        }
        if fmid.signum() == flo.signum() {
            lo = mid;
            flo = fmid;
        } else {
            hi = mid;
        }
    }
    Err(RootFindError::MaxIterations(max_iter))
}

/// Newton–Raphson iteration from an initial guess.
///
/// Fast near a simple root but may diverge from poor guesses; use
/// [`newton_bracketed`] when a bracket is available.
pub fn newton<F, D>(
    f: F,
    df: D,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64, RootFindError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;
    for _ in 0..max_iter {
        let fx = f(x);
        if fx.abs() <= tol {
            return Ok(x);
        }
        let d = df(x);
        if d.abs() < 1e-300 {
            return Err(RootFindError::DerivativeVanished { x });
        }
        x -= fx / d;
    }
    Err(RootFindError::MaxIterations(max_iter))
}

/// Newton iteration safeguarded by a maintained bracket.
///
/// Each Newton step that would leave the current bracket is replaced by a
/// bisection step, so the iteration cannot diverge given a valid bracket.
pub fn newton_bracketed<F, D>(
    f: F,
    df: D,
    lo: f64,
    hi: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64, RootFindError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut lo = lo;
    let mut hi = hi;
    let flo = f(lo);
    if flo.abs() <= tol {
        return Ok(lo);
    }
    if f(hi).abs() <= tol {
        return Ok(hi);
    }
    if flo.signum() == f(hi).signum() {
        return Err(RootFindError::NoBracket { lo, hi });
    }
    let mut lo_sign = flo.signum();
    let mut x = 0.5 * (lo + hi);
    for _ in 0..max_iter {
        let fx = f(x);
        if fx.abs() <= tol || 0.5 * (hi - lo).abs() <= tol {
            return Ok(x);
        }
        // Shrink the bracket around the sign change.
        if fx.signum() == lo_sign {
            lo = x;
            lo_sign = fx.signum();
        } else {
            hi = x;
        }
        let d = df(x);
        let step_ok = d.abs() > 1e-300;
        if step_ok {
            let xn = x - fx / d;
            if xn > lo && xn < hi {
                x = xn;
                continue;
            }
        }
        x = 0.5 * (lo + hi);
    }
    Err(RootFindError::MaxIterations(max_iter))
}
