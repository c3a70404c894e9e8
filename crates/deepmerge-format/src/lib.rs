//! Format adapters for deepmerge.
//!
//! Each supported serialization format exposes a decode/encode pair that
//! converts raw bytes to and from a [`Value`] tree. The merge engine never sees
//! text; it only consumes and produces trees.
//!
//! | format | key order on encode              | notes                                  |
//! |--------|----------------------------------|----------------------------------------|
//! | JSON   | preserved                        | pretty-printed                         |
//! | YAML   | preserved                        | non-string keys decode as strings      |
//! | TOML   | plain values first, then tables  | no `null`; datetimes decode as strings |
//!
//! TOML cannot declare a plain key after a table header in the same table, so
//! the encoder moves plain values above tables and arrays of tables. Relative
//! order is kept within each group.
//!
//! Empty input and a `null` document both decode to an empty mapping. Any
//! other non-mapping document root is a decode error.
//!
//! [`Value`]: deepmerge_types::Value

pub mod adapters;
pub mod error;
pub mod format;

pub use adapters::{FormatAdapter, JsonAdapter, TomlAdapter, YamlAdapter};
pub use error::{FormatError, FormatResult};
pub use format::Format;
