//! Tree value model for deepmerge.
//!
//! Every decoded document, whatever its textual format, is represented as a
//! [`Value`]: a tagged union over ordered mappings, sequences, and opaque
//! scalars. The merge engine and the format adapters only ever exchange
//! `Value`s.
//!
//! # Key Types
//!
//! - [`Value`] — Mapping | Sequence | Scalar
//! - [`Kind`] — The variant tag of a `Value`, used for conflict checks
//! - [`Mapping`] — Ordered, unique-keyed collection of `(String, Value)` pairs
//! - [`Sequence`] — Ordered list of `Value`s
//! - [`Scalar`] / [`Number`] — Leaf values (null, bool, number, string)

pub mod convert;
pub mod de;
pub mod mapping;
pub mod scalar;
pub mod sequence;
pub mod ser;
pub mod value;

pub use mapping::Mapping;
pub use scalar::{Number, Scalar};
pub use sequence::Sequence;
pub use value::{Kind, Value};
