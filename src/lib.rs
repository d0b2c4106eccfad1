#![cfg_attr(not(feature = "std"), no_std)]

pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod osmotic;

pub use crate::adapters::teos10::{FnBackend, Teos10Backend, sa_from_sp};
pub use crate::error::{OsmoticError, OsmoticResult};
pub use crate::models::Constants;
pub use crate::osmotic::coefficient::{
    molality_from_sa, molality_from_sa_with, osmotic_coefficient, osmotic_coefficient_from_args,
    osmotic_coefficient_from_sp, osmotic_coefficient_scalar, osmotic_coefficient_with,
};
pub use crate::osmotic::conform::{Conformed, PressureBroadcast, conform};
