//! Frame pipeline - bridges wireframe shapes to screen lines
//!
//! Every vertex goes through the same steps:
//! 1. rotate around the origin by the view's plane angles
//! 2. translate by the view's offset
//! 3. project down to two dimensions with the view's focal length
//! 4. shift by half the screen size so the origin lands in the middle
//!
//! Each edge then becomes one line between its endpoints' screen points.

use hyperwire_math::{project_to_plane, rotate_about, PointN, WireframeShape};

use crate::canvas::LineCanvas;
use crate::view_state::ViewState;

/// Screen position of a single vertex
///
/// `screen_size` is the surface size in pixels; its halves are rounded
/// down before use.
pub fn transform_vertex(vertex: &PointN, view: &ViewState, screen_size: (u32, u32)) -> [f32; 2] {
    let rotated = rotate_about(vertex, &view.rotation, &view.rotation_center());
    let placed = rotated.translate(&view.translation);
    let [x, y] = project_to_plane(&placed, view.focal_length);

    let (width, height) = screen_size;
    [x + (width / 2) as f32, y + (height / 2) as f32]
}

/// Screen positions of every vertex of `shape`, in vertex order
pub fn screen_points<S: WireframeShape + ?Sized>(
    shape: &S,
    view: &ViewState,
    screen_size: (u32, u32),
) -> Vec<[f32; 2]> {
    shape
        .vertices()
        .iter()
        .map(|v| transform_vertex(v, view, screen_size))
        .collect()
}

/// Draw `shape` onto `canvas`, one line per edge
///
/// Edges with an endpoint that projected to a non-finite position (the
/// focal length cancelled a vertex's depth) are skipped. Returns the
/// number of lines drawn.
pub fn draw_wireframe<S, C>(
    shape: &S,
    view: &ViewState,
    screen_size: (u32, u32),
    color: [f32; 4],
    canvas: &mut C,
) -> usize
where
    S: WireframeShape + ?Sized,
    C: LineCanvas + ?Sized,
{
    let points = screen_points(shape, view, screen_size);

    let mut drawn = 0;
    for edge in shape.edges() {
        let (from, to) = (points[edge.a], points[edge.b]);
        if is_finite(from) && is_finite(to) {
            canvas.draw_line(from, to, color);
            drawn += 1;
        } else {
            log::trace!("Skipping edge {:?} with non-finite endpoint", edge);
        }
    }
    drawn
}

fn is_finite(p: [f32; 2]) -> bool {
    p[0].is_finite() && p[1].is_finite()
}
