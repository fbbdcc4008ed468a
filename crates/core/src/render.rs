//! Rendering seam.
//!
//! The core computes positions; putting pixels on screen is the job of an
//! external collaborator implementing [`Renderer`]. The windowed demo fills
//! this role on screen, while [`TraceRenderer`] mirrors the same calls into
//! the log for headless runs and tests.

use crate::core_types::{Rgb, Vec3};

/// Immediate-mode drawing surface the simulation renders through.
///
/// The call vocabulary mirrors a processing-style renderer: camera and
/// lights are placed per frame, geometry is drawn inside a matrix push/pop
/// pair.
pub trait Renderer {
    /// Place the camera at `eye`, looking at `target`, with `up` as the
    /// view up direction.
    fn set_camera(&mut self, eye: &Vec3, target: &Vec3, up: &Vec3);
    /// Add a point light of the given color at `position`.
    fn point_light(&mut self, color: Rgb, position: &Vec3);
    /// Clear the frame to a solid color.
    fn clear_background(&mut self, color: Rgb);
    /// Push the current model transform.
    fn push_matrix(&mut self);
    /// Pop the model transform pushed last.
    fn pop_matrix(&mut self);
    /// Translate the model transform by `offset`.
    fn translate(&mut self, offset: &Vec3);
    /// Set the fill color for subsequent geometry.
    fn fill(&mut self, color: Rgb);
    /// Draw a sphere of `radius` centered on the current transform origin.
    fn draw_sphere(&mut self, radius: f32);
}

/// Renderer that emits every draw call to the log at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn set_camera(&mut self, eye: &Vec3, target: &Vec3, up: &Vec3) {
        tracing::debug!(?eye, ?target, ?up, "set_camera");
    }

    fn point_light(&mut self, color: Rgb, position: &Vec3) {
        tracing::debug!(?color, ?position, "point_light");
    }

    fn clear_background(&mut self, color: Rgb) {
        tracing::debug!(?color, "clear_background");
    }

    fn push_matrix(&mut self) {
        tracing::debug!("push_matrix");
    }

    fn pop_matrix(&mut self) {
        tracing::debug!("pop_matrix");
    }

    fn translate(&mut self, offset: &Vec3) {
        tracing::debug!(?offset, "translate");
    }

    fn fill(&mut self, color: Rgb) {
        tracing::debug!(?color, "fill");
    }

    fn draw_sphere(&mut self, radius: f32) {
        tracing::debug!(radius, "draw_sphere");
    }
}
