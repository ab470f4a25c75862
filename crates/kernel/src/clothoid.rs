use serde::{Deserialize, Serialize};
use thiserror::Error;

use contour_types::{Point2d, Vec2};

use crate::curves::CurveEval;
use crate::numeric::quadrature::integrate;
use crate::numeric::roots::{newton_bracketed, RootFindError};

/// Errors from clothoid fitting and parametrization queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothoidError {
    #[error("degenerate fit: {reason}")]
    DegenerateFit { reason: &'static str },

    #[error("heading {theta} is not reached on the spiral")]
    HeadingNotReached { theta: f64 },

    #[error(transparent)]
    RootFind(#[from] RootFindError),
}

/// An Euler spiral: curvature varies linearly with arc length.
///
/// The parameter is arc length `s` in `[0, length]`, so the tangent is
/// always unit length and `angle_at`/`curvature_at` are closed-form.
/// Positions require integrating the Fresnel-style integrals
/// `(cos θ(s), sin θ(s))`, done with composite Gauss–Legendre panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Clothoid {
    pub start: Point2d,
    pub start_angle: f64,
    pub start_curvature: f64,
    /// Rate of curvature change per unit arc length.
    pub sharpness: f64,
    pub length: f64,
}

impl Clothoid {
    pub fn new(
        start: Point2d,
        start_angle: f64,
        start_curvature: f64,
        sharpness: f64,
        length: f64,
    ) -> Self {
        Self {
            start,
            start_angle,
            start_curvature,
            sharpness,
            length,
        }
    }

    /// Tangent heading at arc length `s`.
    pub fn angle_at(&self, s: f64) -> f64 {
        self.start_angle + self.start_curvature * s + 0.5 * self.sharpness * s * s
    }

    /// Curvature at arc length `s`.
    pub fn curvature_at(&self, s: f64) -> f64 {
        self.start_curvature + self.sharpness * s
    }

    pub fn end_angle(&self) -> f64 {
        self.angle_at(self.length)
    }

    pub fn end_curvature(&self) -> f64 {
        self.curvature_at(self.length)
    }

    pub fn end_point(&self) -> Point2d {
        self.evaluate(self.length)
    }

    /// Fit the spiral joining two G1 states: matching headings and
    /// curvatures at both ends determines length and sharpness in closed
    /// form, `L = 2·Δθ / (κ0 + κ1)`.
    pub fn fit_g1(
        start: Point2d,
        start_angle: f64,
        start_curvature: f64,
        end_angle: f64,
        end_curvature: f64,
    ) -> Result<Self, ClothoidError> {
        let dtheta = end_angle - start_angle;
        let ksum = start_curvature + end_curvature;
        if ksum.abs() < 1e-15 {
            return Err(ClothoidError::DegenerateFit {
                reason: "mean curvature is zero",
            });
        }
        let length = 2.0 * dtheta / ksum;
        if !(length > 0.0) {
            return Err(ClothoidError::DegenerateFit {
                reason: "turn direction inconsistent with curvature signs",
            });
        }
        let sharpness = (end_curvature - start_curvature) / length;
        Ok(Self {
            start,
            start_angle,
            start_curvature,
            sharpness,
            length,
        })
    }

    /// Arc length in `[0, length]` at which the tangent reaches `theta`.
    pub fn param_at_angle(&self, theta: f64, tol: f64) -> Result<f64, ClothoidError> {
        let result = newton_bracketed(
            |s| self.angle_at(s) - theta,
            |s| self.curvature_at(s),
            0.0,
            self.length,
            tol,
            100,
        );
        match result {
            Ok(s) => Ok(s),
            Err(RootFindError::NoBracket { .. }) => {
                Err(ClothoidError::HeadingNotReached { theta })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Panel count for position integration, scaled with the total turn so
    /// each panel sees at most about an eighth of a revolution.
    fn panels(&self, s: f64) -> usize {
        let turn = self.start_curvature.abs() * s.abs() + 0.5 * self.sharpness.abs() * s * s;
        ((turn / std::f64::consts::FRAC_PI_4).ceil() as usize).clamp(1, 64)
    }
}

impl CurveEval for Clothoid {
    fn evaluate(&self, s: f64) -> Point2d {
        let panels = self.panels(s);
        let x = integrate(|u| self.angle_at(u).cos(), 0.0, s, panels);
        let y = integrate(|u| self.angle_at(u).sin(), 0.0, s, panels);
        self.start + Vec2::new(x, y)
    }

    fn derivative(&self, s: f64) -> Vec2 {
        let theta = self.angle_at(s);
        Vec2::new(theta.cos(), theta.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_straight_segment() {
        // Zero curvature, zero sharpness: a straight line along the heading.
        let c = Clothoid::new(Point2d::new(1.0, 2.0), FRAC_PI_4, 0.0, 0.0, 10.0);
        let p = c.evaluate(2.0f64.sqrt());
        assert!((p.x - 2.0).abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_curvature_is_a_circle() {
        // kappa = 1, sharpness = 0, theta0 = 0 from the origin:
        // position is (sin s, 1 - cos s) exactly.
        let c = Clothoid::new(Point2d::ORIGIN, 0.0, 1.0, 0.0, PI);
        for &s in &[0.3, 1.0, FRAC_PI_2, 2.5, PI] {
            let p = c.evaluate(s);
            assert!((p.x - s.sin()).abs() < 1e-10, "x at s={s}");
            assert!((p.y - (1.0 - s.cos())).abs() < 1e-10, "y at s={s}");
        }
    }

    #[test]
    fn test_unit_speed() {
        let c = Clothoid::new(Point2d::ORIGIN, 0.2, 0.1, 0.05, 8.0);
        // The parameter is arc length, so measured length equals the range.
        let len = c.length_between(0.0, 8.0);
        assert!((len - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_g1_reaches_end_state() {
        let c = Clothoid::fit_g1(Point2d::ORIGIN, 0.0, 0.0, FRAC_PI_4, 0.5).unwrap();
        assert!((c.length - PI).abs() < 1e-12);
        assert!((c.end_angle() - FRAC_PI_4).abs() < 1e-12);
        assert!((c.end_curvature() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fit_g1_degenerate() {
        let err = Clothoid::fit_g1(Point2d::ORIGIN, 0.0, 0.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, ClothoidError::DegenerateFit { .. }));
        // Negative length: turning left with right-handed curvature.
        let err = Clothoid::fit_g1(Point2d::ORIGIN, 0.0, -0.5, 1.0, -0.5).unwrap_err();
        assert!(matches!(err, ClothoidError::DegenerateFit { .. }));
    }

    #[test]
    fn test_param_at_angle() {
        let c = Clothoid::fit_g1(Point2d::ORIGIN, 0.0, 0.0, FRAC_PI_4, 0.5).unwrap();
        // theta(s) = sigma s^2 / 2 with sigma = 0.5/PI.
        let s = c.param_at_angle(FRAC_PI_4 / 2.0, 1e-12).unwrap();
        let expected = PI / 2.0f64.sqrt();
        assert!((s - expected).abs() < 1e-9);
        assert!((c.angle_at(s) - FRAC_PI_4 / 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_param_at_angle_unreachable() {
        let c = Clothoid::fit_g1(Point2d::ORIGIN, 0.0, 0.0, FRAC_PI_4, 0.5).unwrap();
        let err = c.param_at_angle(10.0, 1e-12).unwrap_err();
        assert!(matches!(err, ClothoidError::HeadingNotReached { .. }));
    }
}
