//! Field-validation service for the animal-abuse report forms.
//!
//! [`utils::validation`] holds the validator set; [`backend`] exposes it over
//! a single `POST /validate` endpoint.

pub mod backend;
pub mod config;
pub mod consts;
pub mod utils;
