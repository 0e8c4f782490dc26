#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use tracer::{
        materials::Material,
        math::{vec3, Color, Ray, Vec3},
        scene::Scene,
        shapes::{Ellipsoid, Geometry, Sphere},
    };

    fn sphere(center: Vec3<f64>, radius: f64) -> Sphere {
        Sphere::new(center, radius, Material::none(), Color::white())
    }

    #[test]
    fn sphere_hit_distance() {
        let s = sphere(Vec3::zeros(), 1.0);
        let ray = Ray::new(vec3(0.0, 0.0, -10.0), vec3(0.0, 0.0, 1.0)).unwrap();

        let hit = s.intersect(&ray, 0.0, 100.0);
        assert!(hit.valid && hit.visible);
        assert_relative_eq!(hit.t, 9.0);
        assert_relative_eq!(hit.position, vec3(0.0, 0.0, -1.0));
        assert_relative_eq!(hit.normal, vec3(0.0, 0.0, -1.0));

        // The far root once the near one is clipped away
        let hit = s.intersect(&ray, 9.5, 100.0);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.t, 11.0);
    }

    #[test]
    fn sphere_miss() {
        let s = sphere(vec3(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 1.0, 0.0)).unwrap();

        let hit = s.intersect(&ray, 0.0, 100.0);
        assert!(!hit.valid);
        assert!(!hit.is_hit());
    }

    #[test]
    fn sphere_behind() {
        let s = sphere(vec3(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0)).unwrap();

        let hit = s.intersect(&ray, 0.0, 100.0);
        assert!(hit.valid);
        assert!(!hit.visible);
    }

    #[test]
    fn unit_ellipsoid_is_sphere() {
        let center = vec3(1.0, -2.0, 15.0);
        let s = sphere(center, 3.0);
        let e = Ellipsoid::new(center, Vec3::ones(), 3.0, Material::none(), Color::white())
            .unwrap();

        let directions = [
            vec3(0.0, 0.0, 1.0),
            vec3(0.1, -0.15, 1.0),
            vec3(0.05, -0.1, 1.0),
            vec3(1.0, 0.0, 0.0),
        ];
        for d in directions {
            let ray = Ray::new(Vec3::zeros(), d).unwrap();
            let hs = s.intersect(&ray, 0.0, 100.0);
            let he = e.intersect(&ray, 0.0, 100.0);

            assert_eq!(hs.valid, he.valid);
            assert_eq!(hs.visible, he.visible);
            if hs.is_hit() {
                assert_relative_eq!(hs.t, he.t, epsilon = 1e-9);
                assert_relative_eq!(hs.normal, he.normal, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn stretched_ellipsoid() {
        // Twice as long along z
        let e = Ellipsoid::new(
            vec3(0.0, 0.0, 20.0),
            vec3(1.0, 1.0, 2.0),
            2.0,
            Material::none(),
            Color::white(),
        )
        .unwrap();
        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0)).unwrap();

        let hit = e.intersect(&ray, 0.0, 100.0);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.t, 16.0, epsilon = 1e-9);
        assert_relative_eq!(hit.normal, vec3(0.0, 0.0, -1.0), epsilon = 1e-9);
    }

    #[test]
    fn first_intersection_is_nearest() {
        let geometries: Vec<Geometry> = vec![
            sphere(vec3(0.0, 0.0, 50.0), 5.0).into(),
            sphere(vec3(0.0, 0.0, 20.0), 5.0).into(),
            sphere(vec3(0.0, 0.0, 35.0), 5.0).into(),
            sphere(vec3(0.0, 30.0, 10.0), 5.0).into(),
        ];
        let scene = Scene::new("nearest", geometries, Vec::new(), Color::none());
        let ray = Ray::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0)).unwrap();

        let hit = scene.find_first_intersection(&ray, 0.0, 1000.0);
        assert_eq!(hit.geometry, Some(1));
        assert_relative_eq!(hit.t, 15.0);

        // Skipping past the nearest surfaces
        let hit = scene.find_first_intersection(&ray, 26.0, 1000.0);
        assert_eq!(hit.geometry, Some(2));
        assert_relative_eq!(hit.t, 30.0);

        let hit = scene.find_first_intersection(&ray, 0.0, 10.0);
        assert!(!hit.is_hit());
        assert_eq!(hit.geometry, None);
    }
}
