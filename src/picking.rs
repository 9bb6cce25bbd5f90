//! Ray casting against triangle meshes.

use glam::Vec3;

/// Hits closer than this are treated as touching the ray origin and ignored
const HIT_EPSILON: f32 = 1e-6;

/// Half-line `origin + t * direction` for `t >= 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Slab test: true when the ray enters the box at some `t >= 0`
    pub fn intersects(&self, ray: &Ray) -> bool {
        let inv = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv;
        let t1 = (self.max - ray.origin) * inv;

        let mut t_near = 0.0_f32;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            // Parallel to this slab: inside it or never
            if ray.direction[axis] == 0.0 {
                if ray.origin[axis] < self.min[axis] || ray.origin[axis] > self.max[axis] {
                    return false;
                }
                continue;
            }
            let (lo, hi) = if t0[axis] <= t1[axis] {
                (t0[axis], t1[axis])
            } else {
                (t1[axis], t0[axis])
            };
            t_near = t_near.max(lo);
            t_far = t_far.min(hi);
            if t_near > t_far {
                return false;
            }
        }
        true
    }
}

/// Nearest triangle hit along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the triangle in the mesh's index list (triangle `i` = indices `3i..3i+3`)
    pub face_index: usize,
    /// Vertex indices of the hit triangle
    pub face: [u32; 3],
    /// Distance from the ray origin
    pub distance: f32,
    pub point: Vec3,
}

/// Double-sided Möller–Trumbore test, returning the ray parameter of the hit
pub fn intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);

    // Ray parallel to the triangle plane (or degenerate triangle)
    if det.abs() < f32::EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > HIT_EPSILON).then_some(t)
}

/// Nearest hit of `ray` against an indexed triangle list
pub fn intersect_mesh(ray: &Ray, positions: &[Vec3], indices: &[u32]) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;

    for (face_index, tri) in indices.chunks_exact(3).enumerate() {
        let face = [tri[0], tri[1], tri[2]];
        let [a, b, c] = face.map(|i| positions[i as usize]);

        let Some(t) = intersect_triangle(ray, a, b, c) else {
            continue;
        };
        if nearest.map_or(true, |hit| t < hit.distance) {
            nearest = Some(Hit {
                face_index,
                face,
                distance: t,
                point: ray.at(t),
            });
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_ray(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 10.0), Vec3::NEG_Z)
    }

    #[test]
    fn test_triangle_hit_from_front_and_back() {
        let (a, b, c) = (
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        let front = intersect_triangle(&down_ray(0.0, 0.0), a, b, c);
        assert_eq!(front, Some(10.0));

        let back = Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z);
        assert_eq!(intersect_triangle(&back, a, b, c), Some(4.0));
    }

    #[test]
    fn test_triangle_miss() {
        let (a, b, c) = (
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(intersect_triangle(&down_ray(3.0, 0.0), a, b, c), None);

        // Triangle behind the origin
        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert_eq!(intersect_triangle(&away, a, b, c), None);
    }

    #[test]
    fn test_mesh_returns_nearest_face() {
        let positions = vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
        ];
        let indices = vec![0, 1, 2, 3, 4, 5];

        let hit = intersect_mesh(&down_ray(0.0, 0.0), &positions, &indices).unwrap();
        assert_eq!(hit.face_index, 1);
        assert_eq!(hit.face, [3, 4, 5]);
        assert_eq!(hit.distance, 5.0);
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_aabb_slab_test() {
        let aabb = Aabb::from_points([Vec3::new(-1.0, -1.0, -1.0), Vec3::ONE]).unwrap();
        assert!(aabb.intersects(&down_ray(0.5, 0.5)));
        assert!(!aabb.intersects(&down_ray(2.0, 0.0)));

        // Box behind the ray origin
        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(!aabb.intersects(&away));
    }

    #[test]
    fn test_aabb_of_nothing() {
        assert_eq!(Aabb::from_points(std::iter::empty()), None);
    }
}
