//! Primitive types
//!
//! Fixed-size integers used as the big-integer substrate of the curve
//! arithmetic. They are intentionally minimal: no heap allocation, explicit
//! big-endian storage, and no reliance on wraparound where a reduction is
//! required.
//!
//! Current primitives include:
//! - `U256`: storage for reduced field elements, scalars and moduli
//! - `U512`: wide unsigned intermediate for products and division
//! - `I512`: sign-magnitude wide intermediate for differences and Bézout
//!   coefficients

mod i512;
mod u256;
mod u512;

pub use i512::I512;
pub use u256::U256;
pub use u512::U512;
