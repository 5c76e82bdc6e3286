/*!
Elementary functions of a complex variable.

Everything here is a free function over `Complex` values built from the
arithmetic in `cx`. The transcendental functions are closed-form
identities over `exp()`, `log()` and `sqrt()`:

  * the trigonometric and hyperbolic functions go through `exp()`,
    e.g. _cos(z) = (e^(iz) + e^(−iz)) / 2_;
  * their inverses go through `log()`,
    e.g. _asin(z) = −i·log(iz + √(1 − z²))_.

`log()` takes its imaginary part from `atan2` and `sqrt()` halves that
same angle, so every multi-valued function here lands on the principal
branch those two pick. Nothing else special-cases the branch cuts.
*/

use ::lazy_static::lazy_static;
use ::log::debug;

use crate::cx::Complex;
use crate::err::{CxError, Result};

pub const E:   Complex = Complex::from_real(std::f64::consts::E);
pub const PI:  Complex = Complex::from_real(std::f64::consts::PI);
pub const TAU: Complex = Complex::from_real(std::f64::consts::TAU);

lazy_static! {
    /// The golden ratio _(1 + √5) / 2_.
    pub static ref PHI: Complex = Complex::from_real((1.0 + 5.0f64.sqrt()) / 2.0);
}

pub fn abs(z: Complex) -> f64 { z.abs() }
pub fn ang(z: Complex) -> f64 { z.ang() }
pub fn re(z: Complex) -> f64 { z.re() }
pub fn im(z: Complex) -> f64 { z.im() }
pub fn conj(z: Complex) -> Complex { z.conj() }
pub fn neg(z: Complex) -> Complex { z.negated() }
pub fn neg_conj(z: Complex) -> Complex { z.neg_conj() }
pub fn reciprocal(z: Complex) -> Complex { z.recip() }
pub fn neg_reciprocal(z: Complex) -> Complex { z.neg_recip() }
pub fn random() -> Complex { Complex::random() }

/** _e^z_: magnitude _e^re_ at angle _im_. */
pub fn exp(z: Complex) -> Complex {
    Complex::polar_unchecked(z.re().exp(), z.im())
}

/** The principal natural logarithm, _ln|z| + i·𝜑(z)_. */
pub fn log(z: Complex) -> Complex {
    Complex::rect(z.abs().ln(), z.ang())
}

/** Logarithm to a real base. */
pub fn log_base(z: Complex, base: f64) -> Complex {
    log(z).divided_by_real(base.ln())
}

/** Logarithm to a complex base. */
pub fn log_cx_base(z: Complex, base: Complex) -> Complex {
    log(z).divided_by(log(base))
}

/**
_z^c_ for a complex exponent _c = a + ib_.

With _z = r·e^(iθ)_ the result has magnitude _r^a · e^(−θb)_ and angle
_b·ln(r) + aθ_. Zero to any power is exactly `ZERO`.
*/
pub fn pow(z: Complex, c: Complex) -> Complex {
    let r = z.abs();
    if r == 0.0 {
        return Complex::ZERO;
    }
    let t = z.ang();
    Complex::polar_unchecked(
        r.powf(c.re()) * (-t * c.im()).exp(),
        (r.ln() * c.im()) + (t * c.re()),
    )
}

/** `pow()` with a real exponent, i.e. `pow(z, x + i0)`. */
pub fn powf(z: Complex, x: f64) -> Complex {
    pow(z, Complex::from_real(x))
}

/** A real base raised to a complex exponent. */
pub fn real_pow(a: f64, c: Complex) -> Complex {
    pow(Complex::from_real(a), c)
}

/** The principal square root. */
pub fn sqrt(z: Complex) -> Complex {
    Complex::polar_unchecked(z.abs().sqrt(), z.ang() / 2.0)
}

/** The principal cube root. */
pub fn cbrt(z: Complex) -> Complex {
    Complex::polar_unchecked(z.abs().cbrt(), z.ang() / 3.0)
}

pub fn sin(z: Complex) -> Complex {
    let iz = Complex::I * z;
    (exp(iz) - exp(-iz)) / Complex::from_imag(2.0)
}

pub fn cos(z: Complex) -> Complex {
    let iz = Complex::I * z;
    (exp(iz) + exp(-iz)) / 2.0
}

pub fn tan(z: Complex) -> Complex { sin(z) / cos(z) }
pub fn cot(z: Complex) -> Complex { cos(z) / sin(z) }
pub fn sec(z: Complex) -> Complex { Complex::ONE / cos(z) }
pub fn csc(z: Complex) -> Complex { Complex::ONE / sin(z) }

pub fn sinh(z: Complex) -> Complex {
    (exp(z) - exp(-z)) / 2.0
}

pub fn cosh(z: Complex) -> Complex {
    (exp(z) + exp(-z)) / 2.0
}

pub fn tanh(z: Complex) -> Complex { sinh(z) / cosh(z) }
pub fn coth(z: Complex) -> Complex { cosh(z) / sinh(z) }
pub fn sech(z: Complex) -> Complex { Complex::ONE / cosh(z) }
pub fn csch(z: Complex) -> Complex { Complex::ONE / sinh(z) }

pub fn asin(z: Complex) -> Complex {
    Complex::NEG_I * log((Complex::I * z) + sqrt(Complex::ONE - (z * z)))
}

pub fn acos(z: Complex) -> Complex {
    Complex::NEG_I * log(z + sqrt((z * z) - 1.0))
}

pub fn atan(z: Complex) -> Complex {
    Complex::I * log((Complex::I + z) / (Complex::I - z)) / 2.0
}

pub fn acot(z: Complex) -> Complex {
    Complex::I * log((z - Complex::I) / (z + Complex::I)) / 2.0
}

pub fn asec(z: Complex) -> Complex { acos(Complex::ONE / z) }
pub fn acsc(z: Complex) -> Complex { asin(Complex::ONE / z) }

pub fn asinh(z: Complex) -> Complex {
    log(z + sqrt((z * z) + 1.0))
}

pub fn acosh(z: Complex) -> Complex {
    log(z + sqrt((z * z) - 1.0))
}

pub fn atanh(z: Complex) -> Complex {
    log((Complex::ONE + z) / (Complex::ONE - z)) / 2.0
}

pub fn acoth(z: Complex) -> Complex {
    log((z + 1.0) / (z - 1.0)) / 2.0
}

pub fn asech(z: Complex) -> Complex {
    log((Complex::ONE + sqrt(Complex::ONE - (z * z))) / z)
}

pub fn acsch(z: Complex) -> Complex {
    log((Complex::ONE + sqrt(Complex::ONE + (z * z))) / z)
}

/** Round each component to the nearest integer, halves away from zero. */
pub fn round(z: Complex) -> Complex {
    Complex::rect(z.re().round(), z.im().round())
}

/**
Round each component to `digits` decimal places, halves away from zero.

Fails with `CxError::NegativeDigits` if `digits < 0`.
*/
pub fn round_to(z: Complex, digits: i32) -> Result<Complex> {
    if digits < 0 {
        debug!("rejecting rounding to {} digits", digits);
        return Err(CxError::NegativeDigits(digits));
    }
    let factor = 10.0f64.powi(digits);
    Ok(Complex::rect(
        round_scaled(z.re(), factor),
        round_scaled(z.im(), factor),
    ))
}

// A component that overflows when scaled already has fewer significant
// decimal digits than asked for, and is returned as is.
fn round_scaled(x: f64, factor: f64) -> f64 {
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / factor
}

/** Rotate `z` about the origin by `d_ang` radians. */
pub fn rotate(z: Complex, d_ang: f64) -> Complex {
    Complex::polar_unchecked(z.abs(), z.ang() + d_ang)
}

/** Rotate `z` about `point` by `d_ang` radians. */
pub fn rotate_about(z: Complex, d_ang: f64, point: Complex) -> Complex {
    rotate(z - point, d_ang) + point
}

pub fn rotate_about_xy(z: Complex, d_ang: f64, x: f64, y: f64) -> Complex {
    rotate_about(z, d_ang, Complex::rect(x, y))
}

/** Scale `z` away from the origin by a real factor. */
pub fn scale(z: Complex, factor: f64) -> Complex {
    z * factor
}

/** Scale `z` away from `point` by a real factor. */
pub fn scale_about(z: Complex, factor: f64, point: Complex) -> Complex {
    ((z - point) * factor) + point
}

pub fn scale_about_xy(z: Complex, factor: f64, x: f64, y: f64) -> Complex {
    scale_about(z, factor, Complex::rect(x, y))
}

/**
Scale by a complex factor: multiplies the magnitude by `|factor|` and
rotates by `𝜑(factor)`.
*/
pub fn scale_cx(z: Complex, factor: Complex) -> Complex {
    z * factor
}

pub fn scale_cx_about(z: Complex, factor: Complex, point: Complex) -> Complex {
    ((z - point) * factor) + point
}

pub fn translate(z: Complex, point: Complex) -> Complex {
    z + point
}

pub fn translate_xy(z: Complex, x: f64, y: f64) -> Complex {
    z + Complex::rect(x, y)
}

/** The larger of two values by magnitude; a tie returns `z1`. */
pub fn max(z1: Complex, z2: Complex) -> Complex {
    if z1.is_greater_or_eq(&z2) { z1 } else { z2 }
}

/** The smaller of two values by magnitude; a tie returns `z1`. */
pub fn min(z1: Complex, z2: Complex) -> Complex {
    if z1.is_lesser_or_eq(&z2) { z1 } else { z2 }
}
