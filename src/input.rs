//! Inputs loaded from the workspace.
pub mod translation;
