//! # touchcam
//!
//! Multi-touch gesture recognition driving a clamped 2D camera.
//!
//! touchcam turns a stream of pointer events (touch contacts, an emulated
//! mouse button, wheel steps) into pan and pinch-zoom updates for a
//! two-dimensional camera, keeping the zoom scalar inside configurable
//! bounds and the visible viewport inside configurable world-space scroll
//! limits.
//!
//! The gesture math is host-agnostic: feed [`event::InputEvent`]s to a
//! [`controller::CameraController`] and it resolves them into clamped
//! [`camera::CameraCommand`]s applied to a [`camera::Camera`]. The
//! `touchcam-winit` crate does this wiring for winit windows.
//!
//! ### Example
//!
//! To import touchcam in your `Cargo.toml`:
//!
//! ```toml
//! touchcam = "0.1.0"
//! ```

pub mod camera;
pub mod contact;
pub mod controller;
pub mod event;
pub mod settings;
pub mod viewport;
