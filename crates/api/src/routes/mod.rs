//! HTTP route handlers

pub mod predict;
