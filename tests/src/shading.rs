#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use tracer::{
        color_map::Threshold,
        integrators::shade,
        interaction::Intersection,
        lights::Light,
        materials::Material,
        math::{vec3, Color, Ray, Vec3},
        scene::Scene,
        shapes::{CtMask, Geometry, Sphere, VoxelGrid},
        visibility::{VisibilityTester, SHADOW_EPSILON},
    };

    fn material() -> Material {
        Material::new(
            Color::new(0.2, 0.1, 0.05, 1.0),
            Color::new(0.6, 0.6, 0.6, 1.0),
            Color::new(0.4, 0.4, 0.4, 1.0),
            20.0,
        )
    }

    #[test]
    fn shadowed_is_ambient_only() {
        let scene = Scene::new(
            "shadow",
            vec![
                Sphere::new(vec3(0.0, 0.0, 30.0), 5.0, material(), Color::white()).into(),
                // Blocker right above the hit point
                Sphere::new(vec3(0.0, 0.0, 10.0), 1.0, material(), Color::white()).into(),
            ],
            vec![Light::uniform(vec3(0.0, 0.0, 0.0), Color::white(), 1.0)],
            Color::none(),
        );

        // Look at the big sphere from the side of the blocker
        let ray = Ray::between(vec3(0.0, 0.0, 20.0), vec3(0.0, 0.0, 30.0)).unwrap();
        let hit = scene.find_first_intersection(&ray, 0.0, 100.0);
        assert_eq!(hit.geometry, Some(0));
        assert_relative_eq!(hit.t, 5.0);

        let (color, shadow_rays) = shade(&hit, &scene, ray.o);
        assert_eq!(shadow_rays, 1);
        assert_relative_eq!(color.r, 0.2);
        assert_relative_eq!(color.g, 0.1);
        assert_relative_eq!(color.b, 0.05);
    }

    #[test]
    fn light_at_hit_is_ambient_only() {
        let scene = Scene::new(
            "coincident",
            vec![Sphere::new(vec3(0.0, 0.0, 30.0), 5.0, material(), Color::white()).into()],
            vec![Light::uniform(vec3(0.0, 0.0, 25.0), Color::white(), 2.0)],
            Color::none(),
        );
        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0)).unwrap();
        let hit = scene.find_first_intersection(&ray, 0.0, 100.0);
        assert!(hit.is_hit());

        let (color, shadow_rays) = shade(&hit, &scene, ray.o);
        assert_eq!(shadow_rays, 0);
        assert_relative_eq!(color.r, 0.4, epsilon = 1e-9);
        assert_relative_eq!(color.g, 0.2, epsilon = 1e-9);
        assert_relative_eq!(color.b, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn visibility() {
        let scene = Scene::new(
            "visibility",
            vec![Sphere::new(vec3(0.0, 0.0, 10.0), 1.0, Material::none(), Color::white()).into()],
            Vec::new(),
            Color::none(),
        );

        assert!(!VisibilityTester::new(Vec3::zeros(), vec3(0.0, 0.0, 20.0)).unoccluded(&scene));
        // Segment ends before the sphere
        assert!(VisibilityTester::new(Vec3::zeros(), vec3(0.0, 0.0, 8.0)).unoccluded(&scene));
        assert!(VisibilityTester::new(Vec3::zeros(), vec3(0.0, 20.0, 0.0)).unoccluded(&scene));
        assert!(VisibilityTester::new(Vec3::ones(), Vec3::ones()).unoccluded(&scene));

        let (ray, dist) = VisibilityTester::new(Vec3::zeros(), vec3(0.0, 3.0, 4.0))
            .ray()
            .unwrap();
        assert_relative_eq!(dist, 5.0);
        assert_relative_eq!(ray.d, vec3(0.0, 0.6, 0.8));
    }

    // 2x2x2 volume with only voxel (1, 1, 1) dense
    fn single_voxel_mask() -> Geometry {
        let mut data = vec![0u8; 8];
        data[7] = 255;
        let grid = VoxelGrid::from_parts([2, 2, 2], Vec3::ones(), data).unwrap();
        let map = Threshold {
            threshold: 128,
            color: Color::white(),
        };
        CtMask::new(grid, Vec3::zeros(), 1.0, Arc::new(map))
            .unwrap()
            .into()
    }

    fn oblique_ct_hit(scene: &Scene) -> (Ray<f64>, Intersection) {
        let ray = Ray::between(vec3(1.3, 1.4, -5.0), vec3(1.5, 1.5, 1.5)).unwrap();
        let hit = scene.find_first_intersection(&ray, 0.0, 1000.0);
        assert_eq!(hit.geometry, Some(0));
        (ray, hit)
    }

    #[test]
    fn lit_ct_hit() {
        let scene = Scene::new(
            "ct",
            vec![single_voxel_mask()],
            vec![Light::uniform(vec3(1.5, 1.5, -50.0), Color::white(), 1.0)],
            Color::none(),
        );
        let (ray, hit) = oblique_ct_hit(&scene);
        // The hit sample lies inside the dense voxel, not on its face
        assert!(hit.position.z > 1.0 + 1e-3);
        assert!(VisibilityTester::from_hit(&hit, scene.lights[0].position).unoccluded(&scene));
        // A plain epsilon would start the shadow ray inside the voxel
        assert!(!VisibilityTester::new(hit.position, scene.lights[0].position).unoccluded(&scene));

        let (color, _) = shade(&hit, &scene, ray.o);
        let ambient = hit.material.ambient.r;
        assert!(color.r - ambient > 0.5);
    }

    #[test]
    fn ct_hit_shadowed_by_sphere() {
        let scene = Scene::new(
            "ct",
            vec![
                single_voxel_mask(),
                // Behind the camera, between the volume and the light
                Sphere::new(vec3(1.5, 1.5, -20.0), 2.0, material(), Color::white()).into(),
            ],
            vec![Light::uniform(vec3(1.5, 1.5, -50.0), Color::white(), 1.0)],
            Color::none(),
        );
        let (ray, hit) = oblique_ct_hit(&scene);

        let (color, shadow_rays) = shade(&hit, &scene, ray.o);
        assert_eq!(shadow_rays, 1);
        assert_relative_eq!(color.r, hit.material.ambient.r);
        assert_relative_eq!(color.g, hit.material.ambient.g);
        assert_relative_eq!(color.b, hit.material.ambient.b);
    }

    #[test]
    fn surface_shadow_bias() {
        let scene = Scene::new(
            "bias",
            vec![Sphere::new(vec3(0.0, 0.0, 10.0), 1.0, material(), Color::white()).into()],
            Vec::new(),
            Color::none(),
        );
        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0)).unwrap();
        let hit = scene.find_first_intersection(&ray, 0.0, 100.0);
        assert_eq!(hit.shadow_bias, SHADOW_EPSILON);
    }
}
