//! Propulsion system models.
//!
//! This module contains models for rotors and propellers. The only member so
//! far is the blade-element momentum model in [`bem`].

pub mod bem;
