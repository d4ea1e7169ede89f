//! Interactive deal table: deal, shuffle and reset a deck and watch each hand
//! get classified.

pub mod app;
pub mod controller;
mod ui;
