//! Camera for view ray generation.

use prism_math::DVec3;

/// Pinhole camera mapping pixel coordinates to world-space view rays.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: DVec3,
    /// Unit view direction
    pub look: DVec3,
    /// Unit basis vector along the image's horizontal axis
    pub horizontal: DVec3,
    /// Unit basis vector along the image's vertical axis (points up)
    pub vertical: DVec3,
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
}

impl Camera {
    /// Create a camera from an explicit orthonormal basis.
    pub fn new(
        position: DVec3,
        look: DVec3,
        horizontal: DVec3,
        vertical: DVec3,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            position,
            look,
            horizontal,
            vertical,
            width,
            height,
        }
    }

    /// Create a camera aimed at a target point.
    ///
    /// Builds the look/horizontal/vertical basis from the position, the
    /// point to look at, and an approximate up direction. The up direction
    /// must not be parallel to the viewing direction.
    pub fn aimed(position: DVec3, target: DVec3, up: DVec3, width: u32, height: u32) -> Self {
        let look = (target - position).normalize();
        let horizontal = look.cross(up).normalize();
        let vertical = horizontal.cross(look).normalize();
        Self::new(position, look, horizontal, vertical, width, height)
    }

    /// World-space view ray direction through the center of pixel (x, y).
    ///
    /// Pixel centers map to [0, 1] screen coordinates, the horizontal axis
    /// is corrected for aspect ratio, and the row index is inverted since
    /// rows grow downward while the vertical basis points up. The center
    /// pixel of a square image maps exactly to the look direction.
    pub fn pixel_direction(&self, x: u32, y: u32) -> DVec3 {
        let width = self.width as f64;
        let height = self.height as f64;
        let aspect = width / height;

        let sx = ((x as f64 + 0.5) / width) * aspect - (aspect - 1.0) / 2.0;
        let sy = ((height - 1.0 - y as f64) + 0.5) / height;

        (self.look + self.horizontal * (sx - 0.5) - self.vertical * (sy - 0.5)).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_camera(width: u32, height: u32) -> Camera {
        Camera::aimed(
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::Y,
            width,
            height,
        )
    }

    #[test]
    fn test_aimed_builds_orthonormal_basis() {
        let camera = Camera::aimed(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(4.0, 2.0, 7.0),
            DVec3::Y,
            640,
            480,
        );

        assert!((camera.look.length() - 1.0).abs() < 1e-12);
        assert!((camera.horizontal.length() - 1.0).abs() < 1e-12);
        assert!((camera.vertical.length() - 1.0).abs() < 1e-12);
        assert!(camera.look.dot(camera.horizontal).abs() < 1e-12);
        assert!(camera.look.dot(camera.vertical).abs() < 1e-12);
        assert!(camera.horizontal.dot(camera.vertical).abs() < 1e-12);
    }

    #[test]
    fn test_center_pixel_of_square_image_is_look() {
        let camera = axis_camera(101, 101);
        let direction = camera.pixel_direction(50, 50);
        assert!((direction - camera.look).length() < 1e-12);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let camera = axis_camera(64, 48);
        for (x, y) in [(0, 0), (63, 0), (0, 47), (63, 47), (32, 24)] {
            let direction = camera.pixel_direction(x, y);
            assert!((direction.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_horizontal_symmetry() {
        // Pixels mirrored about the vertical center line produce directions
        // mirrored in the horizontal basis.
        let camera = axis_camera(101, 101);
        let left = camera.pixel_direction(0, 50);
        let right = camera.pixel_direction(100, 50);

        assert!((left.dot(camera.horizontal) + right.dot(camera.horizontal)).abs() < 1e-12);
        assert!((left.dot(camera.vertical) - right.dot(camera.vertical)).abs() < 1e-12);
    }
}
