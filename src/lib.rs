/*!
Complex numbers with value semantics.

  * `cx`: the immutable `Complex` type, its arithmetic, tolerance-based
    comparisons and text form
  * `elem`: elementary functions of a complex variable (exp/log/pow,
    roots, trigonometric and hyperbolic functions and their inverses,
    rounding, and rotate/scale/translate about a point)
  * `angle`: conversions between radians, degrees, gradians and turns,
    and reduction of angles to (−π, π]

```
use cxmath::{elem, Complex};

let z = Complex::rect(3.0, 4.0);
assert_eq!(z.abs(), 5.0);
assert_eq!(elem::exp(elem::log(z)), z);
assert!(Complex::polar(-1.0, 0.0).is_err());
```
*/

pub mod angle;
pub mod cx;
pub mod elem;
pub mod err;

pub use crate::angle::{normalize_angle, AngleUnit};
pub use crate::cx::{Complex, DEFAULT_TOLERANCE};
pub use crate::err::{CxError, Result};
