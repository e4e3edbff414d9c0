// src/gui/components/mod.rs
pub mod chart_panel;
pub mod controls;
pub mod freq_table;
