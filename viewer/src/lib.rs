#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod export;
pub mod locale;
pub mod overlay;
pub mod plot;
