//! Tower fields assembled from the generic quadratic and cubic extensions.
//!
//! Each tower level exposes a small config trait (`Fp2Config`, `Fp6Config`, ...)
//! that a curve module implements with its own parameter record, and a
//! wrapper type adapting it to [`QuadExtConfig`](crate::QuadExtConfig) or
//! [`CubicExtConfig`](crate::CubicExtConfig).

mod fp12_2over3over2;
mod fp2;
mod fp3;
mod fp4;
mod fp6_2over3;
mod fp6_3over2;

pub use fp12_2over3over2::{Fp12, Fp12Config, Fp12ConfigWrapper};
pub use fp2::{Fp2, Fp2Config, Fp2ConfigWrapper};
pub use fp3::{Fp3, Fp3Config, Fp3ConfigWrapper};
pub use fp4::{Fp4, Fp4Config, Fp4ConfigWrapper};
pub use fp6_2over3::{Fp6_2over3, Fp6_2over3Config, Fp6_2over3ConfigWrapper};
pub use fp6_3over2::{Fp6, Fp6Config, Fp6ConfigWrapper};
