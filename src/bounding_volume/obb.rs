//! Oriented Bounding Box.

use crate::bounding_volume::{BoundingVolume, TypedVolume, VolumeType};
use crate::math::{AffineMatrix, Point, Real, UnitVector, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Triangle;
use crate::utils;
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// An Oriented Bounding Box (OBB).
///
/// An OBB is a box whose edges follow three orthonormal axes. Updating it with a transform
/// makes its axes follow the columns of the transform's linear block, and scales its initial
/// half-extents by the length of these columns. A zero-length column flattens the box along
/// an axis chosen to keep the three axes orthonormal.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bounding3d::bounding_volume::{BoundingVolume, Obb};
/// use bounding3d::na::{Matrix4, Point3, Vector3};
///
/// let mut obb = Obb::new(Vector3::new(1.0, 2.0, 3.0));
/// obb.update(&Matrix4::new_translation(&Vector3::new(0.0, 0.0, 10.0)));
///
/// assert_eq!(obb.center(), Point3::new(0.0, 0.0, 10.0));
/// assert_eq!(obb.closest_point(&Point3::new(5.0, 0.0, 10.0)), Point3::new(1.0, 0.0, 10.0));
/// assert_eq!(obb.triangles().len(), 12);
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    initial_half_extents: Vector<Real>,
    half_extents: Vector<Real>,
    axes: [UnitVector<Real>; DIM],
    center: Point<Real>,
}

impl Obb {
    /// The vertex indices of each face of this `Obb`.
    ///
    /// This gives, for each face of this `Obb`, the indices of its
    /// vertices when taken from the `self.vertices()` array. Each face
    /// is listed counter-clockwise when seen from outside of the box,
    /// assuming its axes form a right-handed frame.
    pub const FACES_VERTEX_IDS: [(usize, usize, usize, usize); 6] = [
        // Face with normal +X
        (1, 2, 6, 5),
        // Face with normal -X
        (0, 4, 7, 3),
        // Face with normal +Y
        (2, 3, 7, 6),
        // Face with normal -Y
        (0, 1, 5, 4),
        // Face with normal +Z
        (4, 5, 6, 7),
        // Face with normal -Z
        (0, 3, 2, 1),
    ];

    /// Creates a new OBB centered at the origin, aligned with the world axes.
    #[inline]
    pub fn new(initial_half_extents: Vector<Real>) -> Obb {
        Obb {
            initial_half_extents,
            half_extents: initial_half_extents,
            axes: [Vector::x_axis(), Vector::y_axis(), Vector::z_axis()],
            center: Point::origin(),
        }
    }

    /// Creates a new OBB from its world-space center, half-extents and axes.
    ///
    /// The given half-extents also become the initial half-extents. The axes are expected to
    /// be orthonormal.
    #[inline]
    pub fn from_parts(
        center: Point<Real>,
        half_extents: Vector<Real>,
        axes: [UnitVector<Real>; DIM],
    ) -> Obb {
        Obb {
            initial_half_extents: half_extents,
            half_extents,
            axes,
            center,
        }
    }

    /// The half-extents this OBB was created with.
    #[inline]
    pub fn initial_half_extents(&self) -> &Vector<Real> {
        &self.initial_half_extents
    }

    /// The current half-extents of this OBB, along each of its axes.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// The center of this OBB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The three axes of this OBB.
    #[inline]
    pub fn axes(&self) -> &[UnitVector<Real>; DIM] {
        &self.axes
    }

    /// The transformed `x` axis of this OBB.
    #[inline]
    pub fn x_axis(&self) -> &UnitVector<Real> {
        &self.axes[0]
    }

    /// The transformed `y` axis of this OBB.
    #[inline]
    pub fn y_axis(&self) -> &UnitVector<Real> {
        &self.axes[1]
    }

    /// The transformed `z` axis of this OBB.
    #[inline]
    pub fn z_axis(&self) -> &UnitVector<Real> {
        &self.axes[2]
    }

    /// Expresses the world-space point `pt` in the local frame of this OBB.
    #[inline]
    pub fn local_point(&self, pt: &Point<Real>) -> Point<Real> {
        let d = pt - self.center;
        Point::new(self.axes[0].dot(&d), self.axes[1].dot(&d), self.axes[2].dot(&d))
    }

    /// The half-length of the projection of this OBB on the line directed by `dir`.
    ///
    /// If `dir` is not normalized, the result is scaled by its norm.
    #[inline]
    pub fn projected_radius(&self, dir: &Vector<Real>) -> Real {
        (0..DIM)
            .map(|i| self.half_extents[i] * self.axes[i].dot(dir).abs())
            .sum()
    }

    /// The point of this OBB closest to `pt`.
    ///
    /// Returns `pt` itself if it is inside.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let d = pt - self.center;
        let mut res = self.center;

        for i in 0..DIM {
            let dist = na::clamp(
                self.axes[i].dot(&d),
                -self.half_extents[i],
                self.half_extents[i],
            );
            res += self.axes[i].into_inner() * dist;
        }

        res
    }

    /// The squared distance between `pt` and this OBB. Zero if `pt` is inside.
    #[inline]
    pub fn squared_distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance_squared(&self.closest_point(pt), pt)
    }

    /// Does this OBB contain `pt`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.local_point(pt);
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }

    /// Computes the vertices of this `Obb`.
    ///
    /// Vertices are numbered as the vertices of an [`Aabb`](crate::bounding_volume::Aabb),
    /// the `Obb` axes replacing the world axes.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let hx = self.axes[0].into_inner() * self.half_extents.x;
        let hy = self.axes[1].into_inner() * self.half_extents.y;
        let hz = self.axes[2].into_inner() * self.half_extents.z;
        let c = self.center;

        [
            c - hx - hy - hz,
            c + hx - hy - hz,
            c + hx + hy - hz,
            c - hx + hy - hz,
            c - hx - hy + hz,
            c + hx - hy + hz,
            c + hx + hy + hz,
            c - hx + hy + hz,
        ]
    }

    /// The 12 world-space triangles making up the surface of this OBB, two per face.
    ///
    /// Triangles are wound counter-clockwise when seen from outside of the box, so their
    /// normals point outward, even if the axes of this OBB form a left-handed frame.
    pub fn triangles(&self) -> [Triangle; 12] {
        let vtx = self.vertices();
        let [x, y, z] = self.axes.map(Unit::into_inner);
        let left_handed = x.cross(&y).dot(&z) < 0.0;

        core::array::from_fn(|k| {
            let (i0, i1, i2, i3) = Self::FACES_VERTEX_IDS[k / 2];
            let mut tri = if k % 2 == 0 {
                Triangle::new(vtx[i0], vtx[i1], vtx[i2])
            } else {
                Triangle::new(vtx[i0], vtx[i2], vtx[i3])
            };

            if left_handed {
                tri.reverse();
            }

            tri
        })
    }
}

/// Replaces the axes not flagged as `valid` so that the three axes form a right-handed
/// orthonormal frame with the valid ones.
///
/// The half-extents along the replaced axes must already be zero.
fn complete_frame(
    axes: &mut [UnitVector<Real>; DIM],
    half_extents: &mut Vector<Real>,
    mut valid: [bool; DIM],
) {
    match (0..DIM).find(|i| !valid[*i]) {
        None => return,
        Some(i) if valid[(i + 1) % DIM] && valid[(i + 2) % DIM] => {
            let (j, k) = ((i + 1) % DIM, (i + 2) % DIM);

            let cross = axes[j].cross(&axes[k].into_inner());

            if let Some(axis) = Unit::try_new(cross, DEFAULT_EPSILON) {
                axes[i] = axis;
                return;
            }

            // Parallel columns: the box spans a single segment along `axes[j]`.
            half_extents[j] += half_extents[k];
            half_extents[k] = 0.0;
            valid[k] = false;
        }
        Some(_) => {}
    }

    let Some(i) = (0..DIM).find(|i| valid[*i]) else {
        *axes = [Vector::x_axis(), Vector::y_axis(), Vector::z_axis()];
        return;
    };

    let (j, k) = ((i + 1) % DIM, (i + 2) % DIM);
    let mut orthogonal = None;
    Vector::orthonormal_subspace_basis(&[axes[i].into_inner()], |e| {
        orthogonal = Some(*e);
        false
    });

    match orthogonal {
        Some(e) => {
            axes[j] = Unit::new_normalize(e);
            axes[k] = Unit::new_normalize(axes[i].cross(&axes[j].into_inner()));
        }
        None => *axes = [Vector::x_axis(), Vector::y_axis(), Vector::z_axis()],
    }
}

impl BoundingVolume for Obb {
    fn update(&mut self, transform: &AffineMatrix<Real>) {
        let linear = utils::linear_part(transform);
        let mut valid = [false; DIM];

        for i in 0..DIM {
            let column = linear.column(i).into_owned();

            if let Some((axis, norm)) = Unit::try_new_and_get(column, DEFAULT_EPSILON) {
                self.axes[i] = axis;
                self.half_extents[i] = self.initial_half_extents[i] * norm;
                valid[i] = true;
            } else {
                log::debug!(
                    "OBB transform has a degenerate basis column {}, the box is flattened along it.",
                    i
                );
                self.half_extents[i] = 0.0;
            }
        }

        complete_frame(&mut self.axes, &mut self.half_extents, valid);
        self.center = Point::from(utils::translation_part(transform));
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn volume_type(&self) -> VolumeType {
        VolumeType::Obb
    }

    #[inline]
    fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
        Some(TypedVolume::Obb(self))
    }
}
