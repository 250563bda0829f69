mod containment;
mod dispatcher_chain;
mod distance_monotonicity;
mod enclosure_implies_intersection;
mod intersection_monotonicity;
mod intersection_symmetry;
mod obb_triangles;
mod random_volumes;
mod update_idempotence;
