//! Editor models.
//!
//! # Organization
//!
//! - [`editor`]: the generic editor state (bounded value, precision,
//!   unit-aware editor) and its [`twine_core::Model`] adapters.
//! - [`factory`]: constructors for the standard physics editors.
//! - [`environment`]: the natural environment form.
//! - [`acoustics`]: frequency and acoustic analysis controls.
//!
//! Editors are owned by exactly one widget and mutated on the thread that
//! owns it. Nothing here blocks, spawns, or queues; change listeners run
//! synchronously before the mutating call returns.

pub mod acoustics;
pub mod editor;
pub mod environment;
pub mod factory;
