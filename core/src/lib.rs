#![no_std]

extern crate alloc;

pub use config::*;
pub use copy::*;
pub use error::*;
pub use highlight::*;
pub use theme::*;

mod config;
mod copy;
mod error;
mod highlight;
mod theme;
