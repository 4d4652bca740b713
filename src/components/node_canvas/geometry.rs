//! Circle primitives shared by the store, the controller and the renderer.

/// A circle in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
}

impl Circle {
	pub fn new(x: f64, y: f64, radius: f64) -> Self {
		Self { x, y, radius }
	}

	pub fn distance_to(&self, other: &Circle) -> f64 {
		distance(self.x, self.y, other.x, other.y)
	}

	/// Two circles overlap when their centers are no further apart than the
	/// sum of their radii, less `tolerance`.
	pub fn overlaps(&self, other: &Circle, tolerance: f64) -> bool {
		self.distance_to(other) <= self.radius + other.radius - tolerance
	}

	/// Boundary is inclusive.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		distance(self.x, self.y, x, y) <= self.radius
	}
}

/// Straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub start: (f64, f64),
	pub end: (f64, f64),
	/// Direction of travel from `start` to `end`, in radians.
	pub angle: f64,
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	(x2 - x1).hypot(y2 - y1)
}

/// Segment joining two circles boundary to boundary along the line through
/// their centers. `None` only when the centers coincide and there is no
/// direction to draw in.
pub fn edge_segment(from: &Circle, to: &Circle) -> Option<Segment> {
	if from.distance_to(to) <= f64::EPSILON {
		return None;
	}
	let angle = (to.y - from.y).atan2(to.x - from.x);
	let (cos, sin) = (angle.cos(), angle.sin());
	Some(Segment {
		start: (from.x + from.radius * cos, from.y + from.radius * sin),
		end: (to.x - to.radius * cos, to.y - to.radius * sin),
		angle,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn overlap_is_symmetric() {
		let circles = [
			Circle::new(0.0, 0.0, 16.0),
			Circle::new(31.0, 0.0, 16.0),
			Circle::new(32.0, 0.0, 16.0),
			Circle::new(50.0, 50.0, 16.0),
			Circle::new(-10.0, 7.5, 4.0),
		];
		for a in &circles {
			for b in &circles {
				assert_eq!(a.overlaps(b, 0.0), b.overlaps(a, 0.0));
				assert_eq!(a.overlaps(b, 3.0), b.overlaps(a, 3.0));
			}
		}
	}

	#[test]
	fn touching_circles_overlap() {
		let a = Circle::new(0.0, 0.0, 16.0);
		assert!(a.overlaps(&Circle::new(32.0, 0.0, 16.0), 0.0));
		assert!(!a.overlaps(&Circle::new(32.5, 0.0, 16.0), 0.0));
	}

	#[test]
	fn tolerance_allows_shallow_overlap() {
		let a = Circle::new(0.0, 0.0, 16.0);
		let b = Circle::new(30.0, 0.0, 16.0);
		assert!(a.overlaps(&b, 0.0));
		assert!(!a.overlaps(&b, 4.0));
	}

	#[test]
	fn contains_center_and_boundary() {
		let c = Circle::new(10.0, 10.0, 5.0);
		assert!(c.contains(10.0, 10.0));
		assert!(c.contains(15.0, 10.0));
		assert!(!c.contains(15.1, 10.0));
	}

	#[test]
	fn edge_segment_is_clipped_to_boundaries() {
		let a = Circle::new(0.0, 0.0, 16.0);
		let b = Circle::new(100.0, 0.0, 16.0);
		let seg = edge_segment(&a, &b).unwrap();
		assert!(approx(seg.start.0, 16.0) && approx(seg.start.1, 0.0));
		assert!(approx(seg.end.0, 84.0) && approx(seg.end.1, 0.0));
		assert!(approx(seg.angle, 0.0));

		let c = Circle::new(0.0, 100.0, 16.0);
		let seg = edge_segment(&a, &c).unwrap();
		assert!(approx(seg.start.1, 16.0));
		assert!(approx(seg.end.1, 84.0));
	}

	#[test]
	fn edge_segment_spans_slightly_overlapping_circles() {
		// 30 apart with radius 16: legal once a tolerance of 4 is configured
		let a = Circle::new(0.0, 0.0, 16.0);
		let b = Circle::new(30.0, 0.0, 16.0);
		assert!(a.overlaps(&b, 0.0) && !a.overlaps(&b, 4.0));
		let seg = edge_segment(&a, &b).unwrap();
		assert!(approx(seg.start.0, 16.0));
		assert!(approx(seg.end.0, 14.0));
	}

	#[test]
	fn edge_segment_skips_coincident_centers() {
		let a = Circle::new(0.0, 0.0, 16.0);
		assert_eq!(edge_segment(&a, &a), None);
		assert_eq!(edge_segment(&a, &Circle::new(0.0, 0.0, 8.0)), None);
	}
}
