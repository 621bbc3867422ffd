/// Numeric conversion helpers.
///
/// Conversions between `i64`, `usize` and `f64` used by arithmetic promotion,
/// indexing and the `len` builtin, kept in one place so that lossy casts are
/// explicit.
pub mod num;
