use proptest::prelude::*;
use sat_collision::{are_colliding, CollisionError, Polygon, Shape, Vec2};

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn vec2() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn radius() -> impl Strategy<Value = f64> {
    0.01..50.0f64
}

proptest! {
    #[test]
    fn points_collide_iff_equal(p in vec2(), q in vec2(), same in any::<bool>()) {
        let q = if same { p } else { q };
        let a = Shape::point(p).unwrap();
        let b = Shape::point(q).unwrap();
        let ab = are_colliding(&a, &b).unwrap();
        prop_assert_eq!(ab, p == q);
        prop_assert_eq!(ab, are_colliding(&b, &a).unwrap());
    }

    #[test]
    fn circles_collide_iff_within_radii_sum(c1 in vec2(), c2 in vec2(), r1 in radius(), r2 in radius()) {
        let a = Shape::circle(c1, r1).unwrap();
        let b = Shape::circle(c2, r2).unwrap();
        let expected = c1.distance(c2) <= r1 + r2;
        prop_assert_eq!(are_colliding(&a, &b).unwrap(), expected);
        prop_assert_eq!(are_colliding(&b, &a).unwrap(), expected);
    }

    #[test]
    fn touching_circles_collide(c1 in vec2(), r1 in radius(), r2 in radius()) {
        // Place the second center exactly r1 + r2 along the x axis.
        let c2 = Vec2::new(c1.x + (r1 + r2), c1.y);
        prop_assume!(c1.distance(c2) <= r1 + r2);
        let a = Shape::circle(c1, r1).unwrap();
        let b = Shape::circle(c2, r2).unwrap();
        prop_assert!(are_colliding(&a, &b).unwrap());
    }

    #[test]
    fn rotation_round_trip(
        vertices in prop::collection::vec(vec2(), 3..12),
        radians in -10.0..10.0f64,
        center in vec2(),
    ) {
        let original = Polygon::new(vertices).unwrap();
        let mut polygon = original.clone();
        polygon.rotate(radians, center).unwrap().rotate(-radians, center).unwrap();
        prop_assert_eq!(polygon.vertices.len(), original.vertices.len());
        for (a, b) in polygon.vertices.iter().zip(original.vertices.iter()) {
            prop_assert!(a.distance(*b) < 1e-9, "{:?} drifted to {:?}", b, a);
        }
    }

    #[test]
    fn polygon_always_collides_with_itself(
        vertices in prop::collection::vec(vec2(), 3..12),
    ) {
        let shape = Shape::polygon(vertices).unwrap();
        prop_assert!(are_colliding(&shape, &shape).unwrap());
    }

    #[test]
    fn polygon_with_too_few_vertices_is_rejected(vertices in prop::collection::vec(vec2(), 0..3)) {
        prop_assert!(matches!(Polygon::new(vertices), Err(CollisionError::InvalidArgument(_))));
    }

    #[test]
    fn non_positive_radius_is_rejected(center in vec2(), r in -50.0..=0.0f64) {
        prop_assert!(matches!(Shape::circle(center, r), Err(CollisionError::InvalidArgument(_))));
    }
}

#[test]
fn unit_squares_scenarios() {
    let square = |x: f64, y: f64| {
        Shape::polygon(vec![
            Vec2::new(x, y),
            Vec2::new(x + 1.0, y),
            Vec2::new(x + 1.0, y + 1.0),
            Vec2::new(x, y + 1.0),
        ])
        .unwrap()
    };
    let origin = square(0.0, 0.0);
    assert!(!are_colliding(&origin, &square(2.0, 2.0)).unwrap());
    assert!(are_colliding(&origin, &square(0.5, 0.5)).unwrap());

    let far = Shape::circle(Vec2::new(5.0, 0.0), 1.0).unwrap();
    assert!(!are_colliding(&far, &origin).unwrap());
    let corner = Shape::circle(Vec2::new(2.0, 0.0), 2.0).unwrap();
    assert!(are_colliding(&corner, &origin).unwrap());
}
