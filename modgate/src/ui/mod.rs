// modgate/src/ui/mod.rs
//! Terminal presentation: colour theme and decision rendering.

pub mod output;
pub mod theme;
