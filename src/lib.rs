//! # BEM Models
//!
//! Blade-element momentum (BEM) models for propeller and rotor performance
//! analysis, following the formulation of Mark Drela's QPROP. Airfoil
//! behavior comes from tabulated polars (XFoil/XFLR5 imports or an analytic
//! model) interpolated over angle of attack and Reynolds number, and each
//! blade element is balanced against momentum theory through a bracketed
//! circulation residual.
//!
//! The formulation suits rotors operating at low Reynolds numbers without
//! strong 3D effects; unsteady aerodynamics and wake/vortex modeling are out
//! of scope.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
