//! FFI crate entry for the Flutter bridge.
//!
//! Only `api` is exposed to codegen; everything else lives in
//! `fintrack_core`.

pub mod api;
