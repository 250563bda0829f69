use crate::geometry::random_volumes::rand_transform;
use bounding3d::bounding_volume::{BoundingVolume, Obb};
use na::{Matrix4, Vector3};
use oorandom::Rand32;

#[test]
fn obb_triangles_cover_the_box_surface() {
    let mut rng = Rand32::new(8);
    let mirror = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, -1.0, 1.0));

    for i in 0..200 {
        let mut obb = Obb::new(Vector3::new(0.5, 1.0, 2.0));
        let transform = rand_transform(&mut rng, 3.0, true);
        obb.update(&if i % 2 == 0 { transform } else { transform * mirror });

        let h = obb.half_extents();
        let expected_area = 8.0 * (h.x * h.y + h.y * h.z + h.z * h.x);
        let triangles = obb.triangles();
        let vertices = obb.vertices();
        let mut area = 0.0;

        assert_eq!(triangles.len(), 12);

        for tri in &triangles {
            // Triangles only use corners of the box.
            for pt in tri.vertices() {
                assert!(vertices.contains(&pt));
            }

            // Each triangle lies on a face and its normal points away from the center.
            let local = obb.local_point(&tri.center());
            let on_face = (0..3).any(|k| relative_eq!(local[k].abs(), h[k], epsilon = 1.0e-4));
            assert!(on_face);
            assert!(tri.scaled_normal().dot(&(tri.center() - obb.center())) > 0.0);

            area += tri.area();
        }

        assert_relative_eq!(area, expected_area, max_relative = 1.0e-4);
    }
}
