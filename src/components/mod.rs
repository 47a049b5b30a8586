//! Reusable page fragments.

pub mod greeting;
