use voxlogic_chunk::{CHUNK_WIDTH, ChunkCoord};
use voxlogic_geom::{Aabb, Mat4, Vec3, Vec4};

/// Conservative frustum test for a chunk's bounding cube.
///
/// Visible if any corner lies fully inside the clip volume. Hidden if no corner lies
/// within the depth range. Otherwise visible unless every corner is beyond one of the
/// four side planes. May report chunks that are not on screen, never the reverse.
pub fn is_visible(coord: ChunkCoord, view: &Mat4, projection: &Mat4) -> bool {
    let mvp = *projection * *view * coord.model_matrix();
    let corners = Aabb::cube(Vec3::ZERO, CHUNK_WIDTH)
        .corners()
        .map(|c| mvp.transform(Vec4::point(c)));
    clip_corners_visible(&corners)
}

/// The decision on already-projected corners.
pub fn clip_corners_visible(corners: &[Vec4]) -> bool {
    let in_depth = |c: &Vec4| -c.w < c.z && c.z < c.w;
    let inside = |c: &Vec4| in_depth(c) && -c.w < c.x && c.x < c.w && -c.w < c.y && c.y < c.w;

    if corners.iter().any(inside) {
        return true;
    }
    if !corners.iter().any(in_depth) {
        return false;
    }
    corners.iter().any(|c| c.x > -c.w)
        && corners.iter().any(|c| c.y > -c.w)
        && corners.iter().any(|c| c.x < c.w)
        && corners.iter().any(|c| c.y < c.w)
}
