//! Productions for the individual XProtocol constructs

pub mod cards;
pub mod dependency;
pub mod functor;
pub mod header;
pub mod params;

pub(crate) use cards::card_layout;
pub(crate) use dependency::dependency;
pub(crate) use functor::{functor, pipe_service};
pub(crate) use header::header;
pub(crate) use params::{param, param_array, param_choice, param_map};
