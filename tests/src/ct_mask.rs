#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use tracer::{
        color_map::{ControlPoint, Threshold, TransferFunction},
        math::{vec3, Color, Ray, Vec3},
        scene::Scene,
        shapes::{CtMask, LoadError, VoxelGrid},
    };

    // x runs fastest, then y, then z
    fn grid(values: [u8; 8]) -> VoxelGrid {
        VoxelGrid::from_parts([2, 2, 2], Vec3::ones(), values.to_vec()).unwrap()
    }

    fn threshold() -> Arc<Threshold> {
        Arc::new(Threshold {
            threshold: 100,
            color: Color::new(0.0, 1.0, 0.0, 1.0),
        })
    }

    #[test]
    fn voxel_layout() {
        let g = grid([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(g.resolution(), [2, 2, 2]);
        assert_eq!(g.value(1, 0, 0), 1);
        assert_eq!(g.value(0, 1, 0), 2);
        assert_eq!(g.value(0, 0, 1), 4);
        assert_eq!(g.value(1, 1, 1), 7);
        // Outside reads as empty
        assert_eq!(g.value(-1, 0, 0), 0);
        assert_eq!(g.value(0, 2, 0), 0);
    }

    #[test]
    fn short_data() {
        assert!(matches!(
            VoxelGrid::from_parts([2, 2, 2], Vec3::ones(), vec![0; 7]),
            Err(LoadError::ShortData {
                expected: 8,
                found: 7
            })
        ));
        assert!(VoxelGrid::from_parts([2, 2, 2], vec3(1.0, 0.0, 1.0), vec![0; 8]).is_err());
    }

    #[test]
    fn march_stops_at_dense_voxel() {
        // Dense voxel at (0, 0, 1) with a lighter neighbour along +x
        let mask = CtMask::new(
            grid([0, 0, 0, 0, 200, 150, 0, 0]),
            vec3(10.0, 10.0, 10.0),
            1.0,
            threshold(),
        )
        .unwrap();
        assert_eq!(mask.bounds(), (vec3(10.0, 10.0, 10.0), vec3(12.0, 12.0, 12.0)));

        let ray = Ray::new(vec3(10.5, 10.5, 0.0), vec3(0.0, 0.0, 1.0)).unwrap();
        let hit = mask.intersect(&ray, 0.0, 100.0);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.t, 11.0);
        assert_relative_eq!(hit.color, Color::new(0.0, 1.0, 0.0, 1.0));
        // Only the +x neighbour differs around the hit voxel
        assert_relative_eq!(hit.normal, vec3(1.0, 0.0, 0.0));

        // The column along y = 1 is empty
        let ray = Ray::new(vec3(10.5, 11.5, 0.0), vec3(0.0, 0.0, 1.0)).unwrap();
        assert!(!mask.intersect(&ray, 0.0, 100.0).is_hit());
    }

    #[test]
    fn clip_range() {
        let mask = CtMask::new(grid([255; 8]), Vec3::zeros(), 1.0, threshold()).unwrap();
        let ray = Ray::new(vec3(0.5, 0.5, -5.0), vec3(0.0, 0.0, 1.0)).unwrap();

        assert_relative_eq!(mask.intersect(&ray, 0.0, 100.0).t, 5.0);
        // Marching starts from the near clip when it's inside the volume
        assert_relative_eq!(mask.intersect(&ray, 6.5, 100.0).t, 6.5);
        assert!(!mask.intersect(&ray, 0.0, 4.0).is_hit());
        assert!(!mask.intersect(&ray, 7.5, 100.0).is_hit());
    }

    #[test]
    fn transfer_function_compositing() {
        let tf = TransferFunction::new(vec![
            ControlPoint {
                value: 0.0,
                color: [0.0, 0.0, 0.0, 0.0],
            },
            ControlPoint {
                value: 100.0,
                color: [1.0, 0.0, 0.0, 0.5],
            },
        ]);
        let mask = CtMask::new(grid([100; 8]), Vec3::zeros(), 1.0, Arc::new(tf)).unwrap();
        let ray = Ray::new(vec3(0.5, 0.5, -1.0), vec3(0.0, 0.0, 1.0)).unwrap();

        // Two half transparent samples composited back to front
        let hit = mask.intersect(&ray, 0.0, 100.0);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.t, 1.0);
        assert_relative_eq!(hit.color.r, 0.5 * 0.5 + 0.5);
        assert_relative_eq!(hit.color.a, 0.25 * 0.5 + 0.25);
        // Homogeneous volume has no gradient
        assert_relative_eq!(hit.normal, vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn ct_in_scene() {
        let mask = CtMask::new(grid([255; 8]), vec3(-1.0, -1.0, 20.0), 1.0, threshold()).unwrap();
        let scene = Scene::new("ct", vec![mask.into()], Vec::new(), Color::none());

        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0)).unwrap();
        let hit = scene.find_first_intersection(&ray, 0.0, 100.0);
        assert_eq!(hit.geometry, Some(0));
        assert_relative_eq!(hit.t, 20.0);
    }
}
