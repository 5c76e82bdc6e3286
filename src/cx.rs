/*!
an immutable complex number

Type `Complex` is a plain `Copy` pair of `f64`s that never changes once
built. Values come from the constructors (`rect`, `from_real`,
`from_imag`, `polar`, `random`); every "modifying" operation returns a
new value.

Equality is tolerance-based: two values are equal when both component
differences are strictly smaller than `DEFAULT_TOLERANCE`. Ordering is by
magnitude only, through the `is_greater*` / `is_lesser*` family.

The arithmetic comes in two forms. Each kind has a pair of named
methods (`plus` / `plus_real` and so on), and the `+`, `-`, `*`, `/`
operators delegate to them for any mix of `Complex` and `f64` operands.
*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use ::log::debug;
use ::rand::Rng;
use ::serde_derive::{Deserialize, Serialize};

use crate::err::{CxError, Result};

/// Component-wise tolerance used by every equality check in this crate.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-12;

/**
A complex number _re + i·im_.

The fields are private; construct with `Complex::rect()` and friends.
Serializes as a two-element array `[re, im]`.
*/
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const ZERO:    Complex = Complex { re:  0.0, im:  0.0 };
    pub const ONE:     Complex = Complex { re:  1.0, im:  0.0 };
    pub const NEG_ONE: Complex = Complex { re: -1.0, im:  0.0 };
    pub const I:       Complex = Complex { re:  0.0, im:  1.0 };
    pub const NEG_I:   Complex = Complex { re:  0.0, im: -1.0 };

    /** Build from Cartesian (rectangular) coordinates. Any `f64` is accepted. */
    pub const fn rect(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /** A purely real value; the imaginary part is zero. */
    pub const fn from_real(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }

    /** A purely imaginary value; the real part is zero. */
    pub const fn from_imag(im: f64) -> Complex {
        Complex { re: 0.0, im }
    }

    /**
    Build from polar coordinates: magnitude `r` and angle `t` in radians.

    Fails with `CxError::NegativeMagnitude` if `r < 0`. A NaN magnitude
    is not negative and is let through.
    */
    pub fn polar(r: f64, t: f64) -> Result<Complex> {
        if r < 0.0 {
            debug!("rejecting polar construction with magnitude {}", r);
            return Err(CxError::NegativeMagnitude(r));
        }
        Ok(Complex::polar_unchecked(r, t))
    }

    // For callers whose magnitude is non-negative by construction
    // (exp, pow, root results).
    pub(crate) fn polar_unchecked(r: f64, t: f64) -> Complex {
        Complex {
            re: r * t.cos(),
            im: r * t.sin(),
        }
    }

    /**
    Both components drawn independently and uniformly from [0, 1), using
    the calling thread's generator.
    */
    pub fn random() -> Complex {
        Complex {
            re: ::rand::random::<f64>(),
            im: ::rand::random::<f64>(),
        }
    }

    /** Like `random()`, but drawing from the supplied generator. */
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Complex {
        Complex {
            re: rng.gen::<f64>(),
            im: rng.gen::<f64>(),
        }
    }

    pub fn default_tolerance() -> f64 {
        DEFAULT_TOLERANCE
    }

    pub fn re(&self) -> f64 { self.re }
    pub fn im(&self) -> f64 { self.im }

    /** The squared magnitude _re² + im²_. */
    pub fn sqmod(&self) -> f64 {
        (self.re * self.re) + (self.im * self.im)
    }

    /** The magnitude _|z|_. */
    pub fn abs(&self) -> f64 {
        self.sqmod().sqrt()
    }

    /** The angle _𝜑(z)_ in radians, in (−π, π]. */
    pub fn ang(&self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn negated(&self) -> Complex {
        Complex { re: -self.re, im: -self.im }
    }

    pub fn conj(&self) -> Complex {
        Complex { re: self.re, im: -self.im }
    }

    /** The reflection across the imaginary axis, _(−re, im)_. */
    pub fn neg_conj(&self) -> Complex {
        Complex { re: -self.re, im: self.im }
    }

    /** `ONE / self`; both components are NaN when `self` is zero. */
    pub fn recip(&self) -> Complex {
        Complex::ONE.divided_by(*self)
    }

    /** `NEG_ONE / self`. */
    pub fn neg_recip(&self) -> Complex {
        Complex::NEG_ONE.divided_by(*self)
    }

    /**
    The unit-magnitude value pointing the same way as `self`.

    Zero normalizes to exactly `ZERO` rather than NaN.
    */
    pub fn norm(&self) -> Complex {
        let r = self.abs();
        if r == 0.0 {
            return Complex::ZERO;
        }
        self.divided_by_real(r)
    }

    /** _|re| / |z|_; NaN for zero. */
    pub fn real_ratio(&self) -> f64 {
        self.re.abs() / self.abs()
    }

    /** _|im| / |z|_; NaN for zero. */
    pub fn imag_ratio(&self) -> f64 {
        self.im.abs() / self.abs()
    }

    pub fn with_re(&self, re: f64) -> Complex {
        Complex { re, im: self.im }
    }

    pub fn with_im(&self, im: f64) -> Complex {
        Complex { re: self.re, im }
    }

    /**
    Same angle, new magnitude. Fails like `polar()` if `abs` is negative.
    */
    pub fn with_abs(&self, abs: f64) -> Result<Complex> {
        Complex::polar(abs, self.ang())
    }

    /** Same magnitude, new angle. */
    pub fn with_ang(&self, ang: f64) -> Complex {
        Complex::polar_unchecked(self.abs(), ang)
    }

    pub fn plus(&self, other: Complex) -> Complex {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /** Adds `x` to the real part only. */
    pub fn plus_real(&self, x: f64) -> Complex {
        Complex { re: self.re + x, im: self.im }
    }

    pub fn minus(&self, other: Complex) -> Complex {
        Complex {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /** Subtracts `x` from the real part only. */
    pub fn minus_real(&self, x: f64) -> Complex {
        Complex { re: self.re - x, im: self.im }
    }

    pub fn times(&self, other: Complex) -> Complex {
        Complex {
            re: (self.re * other.re) - (self.im * other.im),
            im: (self.re * other.im) + (self.im * other.re),
        }
    }

    /** Scales both components by `x`. */
    pub fn times_real(&self, x: f64) -> Complex {
        Complex { re: self.re * x, im: self.im * x }
    }

    /**
    Multiply by the conjugate of `other` and divide by its squared
    magnitude. A zero divisor yields NaN in both components.
    */
    pub fn divided_by(&self, other: Complex) -> Complex {
        let d = other.sqmod();
        Complex {
            re: ((self.re * other.re) + (self.im * other.im)) / d,
            im: ((self.im * other.re) - (self.re * other.im)) / d,
        }
    }

    /**
    Divides each component by `x` independently, so dividing by zero
    gives signed infinities (or NaN for a zero component).
    */
    pub fn divided_by_real(&self, x: f64) -> Complex {
        Complex { re: self.re / x, im: self.im / x }
    }

    pub fn is_zero(&self) -> bool {
        self.approx_eq(&Complex::ZERO)
    }

    /** Component-wise equality within `DEFAULT_TOLERANCE`. */
    pub fn approx_eq(&self, other: &Complex) -> bool {
        self.approx_eq_within(other, DEFAULT_TOLERANCE)
    }

    /** Component-wise equality within `tol`. */
    pub fn approx_eq_within(&self, other: &Complex, tol: f64) -> bool {
        (self.re - other.re).abs() < tol && (self.im - other.im).abs() < tol
    }

    /** Equality with the real value `x`, i.e. with `x + i0`. */
    pub fn approx_eq_real(&self, x: f64) -> bool {
        (self.re - x).abs() < DEFAULT_TOLERANCE && self.im.abs() < DEFAULT_TOLERANCE
    }

    /** Magnitudes equal within `DEFAULT_TOLERANCE`. */
    pub fn abs_eq(&self, other: &Complex) -> bool {
        (self.abs() - other.abs()).abs() < DEFAULT_TOLERANCE
    }

    pub fn abs_eq_real(&self, x: f64) -> bool {
        (self.abs() - x.abs()).abs() < DEFAULT_TOLERANCE
    }

    pub fn is_greater(&self, other: &Complex) -> bool {
        self.abs() > other.abs()
    }

    pub fn is_greater_real(&self, x: f64) -> bool {
        self.abs() > x.abs()
    }

    /*
    The "or equal" checks fold in the tolerance-based magnitude equality,
    so near the boundary both `is_greater_or_eq` and `is_lesser_or_eq` can
    hold at once.
    */
    pub fn is_greater_or_eq(&self, other: &Complex) -> bool {
        self.is_greater(other) || self.abs_eq(other)
    }

    pub fn is_greater_or_eq_real(&self, x: f64) -> bool {
        self.is_greater_real(x) || self.abs_eq_real(x)
    }

    pub fn is_lesser(&self, other: &Complex) -> bool {
        self.abs() < other.abs()
    }

    pub fn is_lesser_real(&self, x: f64) -> bool {
        self.abs() < x.abs()
    }

    pub fn is_lesser_or_eq(&self, other: &Complex) -> bool {
        self.is_lesser(other) || self.abs_eq(other)
    }

    pub fn is_lesser_or_eq_real(&self, x: f64) -> bool {
        self.is_lesser_real(x) || self.abs_eq_real(x)
    }
}

impl Default for Complex {
    fn default() -> Complex { Complex::ZERO }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Complex) -> bool { self.approx_eq(other) }
}

impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool { self.approx_eq_real(*other) }
}

/*
Hashes the exact bit patterns, so values that compare equal under the
tolerance may hash differently (and 0.0 / -0.0 hash differently).
*/
impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.re.to_bits().hash(state);
        self.im.to_bits().hash(state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        match f.precision() {
            Some(p) => write!(f, "{:.*} {} i{:.*}", p, self.re, sign, p, self.im.abs()),
            None => write!(f, "{} {} i{}", self.re, sign, self.im.abs()),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output { self.plus(other) }
}

impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, other: f64) -> Complex { self.plus_real(other) }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex { other.plus_real(self) }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output { self.minus(other) }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, other: f64) -> Complex { self.minus_real(other) }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex { Complex::from_real(self).minus(other) }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output { self.times(other) }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, other: f64) -> Complex { self.times_real(other) }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex { other.times_real(self) }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output { self.divided_by(other) }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, other: f64) -> Complex { self.divided_by_real(other) }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, other: Complex) -> Complex { Complex::from_real(self).divided_by(other) }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output { self.negated() }
}

impl From<f64> for Complex {
    fn from(x: f64) -> Complex { Complex::from_real(x) }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Complex { Complex { re, im } }
}

impl From<[f64; 2]> for Complex {
    fn from(a: [f64; 2]) -> Complex {
        Complex { re: a[0], im: a[1] }
    }
}

impl From<Complex> for [f64; 2] {
    fn from(z: Complex) -> [f64; 2] {
        [z.re, z.im]
    }
}
