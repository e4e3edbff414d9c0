// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{analyze, rerun, copy, open_chart}.

mod analyze; // src/gui/actions/analyze.rs
mod copy;    // src/gui/actions/copy.rs
mod open;    // src/gui/actions/open.rs

pub use analyze::{analyze, rerun};
pub use copy::copy;
pub use open::open_chart;
