//! Data types shared by the layout, selection and rendering code.

mod cell;
mod config;
mod selection;

pub use cell::*;
pub use config::*;
pub use selection::*;
