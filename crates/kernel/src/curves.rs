use serde::{Deserialize, Serialize};

use contour_types::{Point2d, Vec2};

use crate::clothoid::Clothoid;
use crate::numeric::quadrature::integrate;
use crate::numeric::roots::{newton_bracketed, RootFindError};

/// Parametric evaluation shared by every planar curve type.
///
/// `length_between` and `param_at_length` are provided in terms of the
/// derivative via quadrature and safeguarded Newton inversion.
pub trait CurveEval {
    /// Evaluate the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2d;

    /// Evaluate the derivative (tangent, unnormalized) at parameter `t`.
    fn derivative(&self, t: f64) -> Vec2;

    /// Parametric speed `|dC/dt|` at `t`.
    fn speed(&self, t: f64) -> f64 {
        self.derivative(t).length()
    }

    /// Arc length between two parameter values.
    fn length_between(&self, t0: f64, t1: f64) -> f64 {
        integrate(|t| self.speed(t), t0, t1, 16)
    }

    /// Parameter in `[t0, t1]` at which the arc length from `t0` reaches `s`.
    ///
    /// Errors with `NoBracket` when `s` exceeds the available length.
    fn param_at_length(&self, t0: f64, t1: f64, s: f64, tol: f64) -> Result<f64, RootFindError> {
        newton_bracketed(
            |t| self.length_between(t0, t) - s,
            |t| self.speed(t),
            t0,
            t1,
            tol,
            100,
        )
    }
}

/// An infinite line defined by an origin and unit direction.
/// The parameter is signed distance along the direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line2d {
    pub origin: Point2d,
    pub direction: Vec2,
}

impl Line2d {
    pub fn new(origin: Point2d, direction: Vec2) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn from_points(a: Point2d, b: Point2d) -> Self {
        let dir = b - a;
        Self {
            origin: a,
            direction: dir.normalize(),
        }
    }

    pub fn closest_point(&self, p: &Point2d) -> (Point2d, f64) {
        let v = *p - self.origin;
        let t = v.dot(&self.direction);
        (self.evaluate(t), t)
    }

    pub fn distance_to_point(&self, p: &Point2d) -> f64 {
        let (closest, _) = self.closest_point(p);
        p.distance_to(&closest)
    }
}

impl CurveEval for Line2d {
    fn evaluate(&self, t: f64) -> Point2d {
        self.origin + self.direction * t
    }

    fn derivative(&self, _t: f64) -> Vec2 {
        self.direction
    }
}

/// A full circle; the parameter is the angle from the positive x axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle2d {
    pub center: Point2d,
    pub radius: f64,
}

impl Circle2d {
    pub fn new(center: Point2d, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Angle of `p` as seen from the center.
    pub fn point_angle(&self, p: &Point2d) -> f64 {
        (*p - self.center).angle()
    }
}

impl CurveEval for Circle2d {
    fn evaluate(&self, t: f64) -> Point2d {
        self.center + Vec2::new(self.radius * t.cos(), self.radius * t.sin())
    }

    fn derivative(&self, t: f64) -> Vec2 {
        Vec2::new(-self.radius * t.sin(), self.radius * t.cos())
    }
}

/// A circular arc with a signed sweep (negative = clockwise).
/// The parameter runs over `[0, 1]` from start to end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arc2d {
    pub center: Point2d,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Arc2d {
    pub fn new(center: Point2d, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Arc through three points, oriented `a -> b -> c`.
    /// Returns None when the points are (near-)collinear.
    pub fn from_three_points(a: Point2d, b: Point2d, c: Point2d) -> Option<Self> {
        let cross = (b - a).cross(&(c - a));
        let d = 2.0 * cross;
        if d.abs() < 1e-12 {
            return None;
        }
        let aa = a.x * a.x + a.y * a.y;
        let bb = b.x * b.x + b.y * b.y;
        let cc = c.x * c.x + c.y * c.y;
        let ux = (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / d;
        let uy = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;
        let center = Point2d::new(ux, uy);
        let radius = center.distance_to(&a);

        let theta_a = (a - center).angle();
        let theta_c = (c - center).angle();
        // cross > 0 means a -> b -> c turns counter-clockwise.
        let sweep = if cross > 0.0 {
            wrap_positive(theta_c - theta_a)
        } else {
            -wrap_positive(theta_a - theta_c)
        };
        Some(Self {
            center,
            radius,
            start_angle: theta_a,
            sweep,
        })
    }

    pub fn start_point(&self) -> Point2d {
        self.evaluate(0.0)
    }

    pub fn end_point(&self) -> Point2d {
        self.evaluate(1.0)
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
}

impl CurveEval for Arc2d {
    fn evaluate(&self, t: f64) -> Point2d {
        let angle = self.start_angle + self.sweep * t;
        self.center + Vec2::new(self.radius * angle.cos(), self.radius * angle.sin())
    }

    fn derivative(&self, t: f64) -> Vec2 {
        let angle = self.start_angle + self.sweep * t;
        Vec2::new(-angle.sin(), angle.cos()) * (self.radius * self.sweep)
    }
}

/// Wrap an angle difference into [0, 2*PI).
fn wrap_positive(angle: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let wrapped = angle.rem_euclid(tau);
    if wrapped >= tau {
        0.0
    } else {
        wrapped
    }
}

/// Analytic planar curve representations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Curve2 {
    Line(Line2d),
    Circle(Circle2d),
    Arc(Arc2d),
    Clothoid(Clothoid),
}

impl Curve2 {
    /// Classify the curve type for logging/debugging.
    pub fn curve_type_name(&self) -> &'static str {
        match self {
            Curve2::Line(_) => "Line",
            Curve2::Circle(_) => "Circle",
            Curve2::Arc(_) => "Arc",
            Curve2::Clothoid(_) => "Clothoid",
        }
    }
}

impl CurveEval for Curve2 {
    fn evaluate(&self, t: f64) -> Point2d {
        match self {
            Curve2::Line(l) => l.evaluate(t),
            Curve2::Circle(c) => c.evaluate(t),
            Curve2::Arc(a) => a.evaluate(t),
            Curve2::Clothoid(c) => c.evaluate(t),
        }
    }

    fn derivative(&self, t: f64) -> Vec2 {
        match self {
            Curve2::Line(l) => l.derivative(t),
            Curve2::Circle(c) => c.derivative(t),
            Curve2::Arc(a) => a.derivative(t),
            Curve2::Clothoid(c) => c.derivative(t),
        }
    }
}
