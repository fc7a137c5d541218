//! Virtual image plane for ray generation.

use lumen_core::{Camera, Resolution};
use lumen_math::{Ray, Vector3};
use rand::{Rng, RngCore};

/// The image plane one unit in front of the camera, in world space.
///
/// Built once per render and shared read-only by every worker.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    /// Camera origin, start of every primary ray
    origin: Vector3,
    /// World point one unit along the camera direction
    center: Vector3,
    /// Unit vector pointing right across the image
    x_axis: Vector3,
    /// Unit vector pointing down the image (−up)
    y_axis: Vector3,
    /// World-space extent of the plane
    width: f64,
    height: f64,
    resolution: Resolution,

    // Cached per-pixel values
    pixel_width: f64,
    pixel_height: f64,
    top_left_pixel: Vector3,
}

impl Screen {
    /// Derive the screen for `camera` at the given output resolution.
    pub fn new(camera: &Camera, resolution: Resolution) -> Self {
        let center = camera.origin() + camera.direction();
        let x_axis = camera.direction().cross(camera.up()).normalize();
        let y_axis = -camera.up();
        let height = 2.0 * (camera.fov() / 2.0).tan();
        let width = height * resolution.aspect();

        let pixel_width = width / resolution.width as f64;
        let pixel_height = height / resolution.height as f64;

        // Corner of the plane, then half a pixel back toward the center
        let top_left_pixel = center - (width / 2.0) * x_axis - (height / 2.0) * y_axis
            + (pixel_width / 2.0) * x_axis
            + (pixel_height / 2.0) * y_axis;

        Self {
            origin: camera.origin(),
            center,
            x_axis,
            y_axis,
            width,
            height,
            resolution,
            pixel_width,
            pixel_height,
            top_left_pixel,
        }
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn x_axis(&self) -> Vector3 {
        self.x_axis
    }

    pub fn y_axis(&self) -> Vector3 {
        self.y_axis
    }

    /// World-space width of the plane.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// World-space height of the plane.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// World-space center of pixel (x, y).
    pub fn pixel_center(&self, x: u32, y: u32) -> Vector3 {
        self.top_left_pixel
            + (x as f64 * self.pixel_width) * self.x_axis
            + (y as f64 * self.pixel_height) * self.y_axis
    }

    /// Point inside pixel (x, y) offset by (dx, dy) pixels, each in [-0.5, 0.5].
    pub fn sub_pixel_position(&self, x: u32, y: u32, dx: f64, dy: f64) -> Vector3 {
        self.pixel_center(x, y)
            + (dx * self.pixel_width) * self.x_axis
            + (dy * self.pixel_height) * self.y_axis
    }

    /// Generate one jittered camera ray through pixel (x, y).
    pub fn pixel_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let (dx, dy) = sample_square(rng);
        let target = self.sub_pixel_position(x, y, dx, dy);

        // The plane sits one unit ahead, so the direction is never zero
        Ray::from_unit(self.origin, (target - self.origin).normalize())
    }

    /// Generate `samples` jittered camera rays through pixel (x, y).
    pub fn pixel_rays(&self, x: u32, y: u32, samples: u32, rng: &mut dyn RngCore) -> Vec<Ray> {
        (0..samples).map(|_| self.pixel_ray(x, y, rng)).collect()
    }
}

/// Sample a random offset in the square [-0.5, 0.5] x [-0.5, 0.5].
fn sample_square(rng: &mut dyn RngCore) -> (f64, f64) {
    (rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn camera() -> Camera {
        Camera::new(Vector3::new(0.0, 0.0, 10.0), -Vector3::Z, Vector3::Y, 90f64.to_radians()).unwrap()
    }

    #[test]
    fn test_screen_basis() {
        let screen = Screen::new(&camera(), Resolution::new(4, 2));

        assert!((screen.center() - Vector3::new(0.0, 0.0, 9.0)).length() < 1e-12);
        // direction × up = -Z × Y = +X
        assert!((screen.x_axis() - Vector3::X).length() < 1e-12);
        assert_eq!(screen.y_axis(), -Vector3::Y);
        // tan(45°) = 1
        assert!((screen.height() - 2.0).abs() < 1e-12);
        assert!((screen.width() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_centers() {
        let screen = Screen::new(&camera(), Resolution::new(4, 2));

        // Pixels are 1x1 world units; top-left center is half a pixel in from the corner
        let top_left = screen.pixel_center(0, 0);
        assert!((top_left - Vector3::new(-1.5, 0.5, 9.0)).length() < 1e-12);

        let bottom_right = screen.pixel_center(3, 1);
        assert!((bottom_right - Vector3::new(1.5, -0.5, 9.0)).length() < 1e-12);
    }

    #[test]
    fn test_sub_pixel_corner() {
        let screen = Screen::new(&camera(), Resolution::new(4, 2));
        let corner = screen.sub_pixel_position(0, 0, -0.5, -0.5);
        assert!((corner - Vector3::new(-2.0, 1.0, 9.0)).length() < 1e-12);
    }

    #[test]
    fn test_pixel_rays_stay_inside_pixel() {
        let screen = Screen::new(&camera(), Resolution::new(4, 2));
        let mut rng = StdRng::seed_from_u64(42);

        let rays = screen.pixel_rays(1, 0, 64, &mut rng);
        assert_eq!(rays.len(), 64);

        for ray in rays {
            assert_eq!(ray.origin, Vector3::new(0.0, 0.0, 10.0));
            assert!((ray.direction.length() - 1.0).abs() < 1e-12);

            // Where the ray crosses the screen plane (z = 9)
            let hit = ray.at(1.0 / -ray.direction.z);
            assert!(hit.x >= -1.0 - 1e-9 && hit.x <= 0.0 + 1e-9, "x = {}", hit.x);
            assert!(hit.y >= 0.0 - 1e-9 && hit.y <= 1.0 + 1e-9, "y = {}", hit.y);
        }
    }

    #[test]
    fn test_center_ray_points_forward() {
        let screen = Screen::new(&camera(), Resolution::new(101, 101));
        let mut rng = StdRng::seed_from_u64(7);

        let ray = screen.pixel_ray(50, 50, &mut rng);
        assert!(ray.direction.z < -0.99);
    }
}
