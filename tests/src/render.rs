#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use tracer::{
        camera::{Camera, ViewParameters},
        integrators::IntegratorType,
        lights::Light,
        materials::Material,
        math::{vec3, Color, Vec3},
        renderer::{frame_path, prepare_output_dir, render_frame, Renderer},
        scene::Scene,
        settings::RenderSettings,
        shapes::Sphere,
    };

    fn material() -> Material {
        Material::new(
            Color::new(0.1, 0.1, 0.1, 1.0),
            Color::new(0.5, 0.4, 0.3, 1.0),
            Color::new(0.3, 0.3, 0.3, 1.0),
            10.0,
        )
    }

    fn scene(background: Color<f64>) -> Scene {
        Scene::new(
            "single sphere",
            vec![Sphere::new(vec3(0.0, 0.0, 200.0), 40.0, material(), Color::white()).into()],
            vec![Light::uniform(vec3(0.0, 120.0, 0.0), Color::white(), 1.0)],
            background,
        )
    }

    fn camera() -> Camera {
        Camera::new(
            Vec3::zeros(),
            vec3(0.0, 0.0, 1.0),
            vec3(0.0, 1.0, 0.0),
            ViewParameters::default(),
        )
        .unwrap()
    }

    #[test]
    fn phong_frame() {
        let background = Color::new(0.1, 0.2, 0.3, 1.0);
        let scene = scene(background);
        let integrator = IntegratorType::Phong.instantiate();

        let (film, ray_count) = render_frame(&scene, &camera(), integrator.as_ref(), 160, 120);
        assert_eq!(film.width(), 160);
        assert_eq!(film.height(), 120);
        // At least one primary ray per pixel
        assert!(ray_count >= 160 * 120);

        // Center ray hits the sphere head on at (0, 0, 160)
        // L = (0, 0.6, -0.8), N.L = 0.8, R = (0, -0.6, -0.8), V.R = 0.8
        let center = film.pixel(80, 60);
        let specular = 0.3 * 0.8f64.powf(10.0);
        assert_relative_eq!(center.r, 0.1 + 0.5 * 0.8 + specular, epsilon = 1e-9);
        assert_relative_eq!(center.g, 0.1 + 0.4 * 0.8 + specular, epsilon = 1e-9);
        assert_relative_eq!(center.b, 0.1 + 0.3 * 0.8 + specular, epsilon = 1e-9);

        // Corners see past the sphere
        assert_eq!(film.pixel(0, 0), background);
        assert_eq!(film.pixel(159, 119), background);
    }

    #[test]
    fn clip_planes() {
        let background = Color::new(0.1, 0.2, 0.3, 1.0);
        let scene = scene(background);
        let view = ViewParameters {
            back_plane_distance: 100.0,
            ..ViewParameters::default()
        };
        let camera = Camera::new(Vec3::zeros(), vec3(0.0, 0.0, 1.0), vec3(0.0, 1.0, 0.0), view)
            .unwrap();
        let integrator = IntegratorType::Phong.instantiate();

        let (film, _) = render_frame(&scene, &camera, integrator.as_ref(), 16, 12);
        assert!(film.pixels().iter().all(|&p| p == background));
    }

    #[test]
    fn normals_frame() {
        let scene = scene(Color::none());
        let integrator = IntegratorType::Normals.instantiate();

        let (film, ray_count) = render_frame(&scene, &camera(), integrator.as_ref(), 160, 120);
        assert_eq!(ray_count, 160 * 120);

        let center = film.pixel(80, 60);
        assert_relative_eq!(center.r, 0.5);
        assert_relative_eq!(center.g, 0.5);
        assert_relative_eq!(center.b, 0.0);
    }

    #[test]
    fn animation() {
        let dir = std::env::temp_dir().join(format!("tracer_animation_{}", std::process::id()));
        prepare_output_dir(&dir).unwrap();

        let settings = RenderSettings {
            width: 16,
            height: 12,
            frames: 3,
            threads: 2,
            ..RenderSettings::default()
        };
        let scene = Scene::builtin(settings.background());

        let renderer = Renderer::new(settings.threads).unwrap();
        let results = renderer.render_animation(&scene, &settings, &dir).unwrap();
        assert_eq!(results.len(), 3);

        for (frame, result) in results.iter().enumerate() {
            let stats = result.as_ref().unwrap();
            assert_eq!(stats.frame, frame);
            assert_eq!(stats.path, frame_path(&dir, frame, "png"));
            assert!(stats.path.exists());
            assert!(stats.ray_count >= 16 * 12);
        }
        assert!(dir.join("001.png").exists());
        assert!(dir.join("003.png").exists());

        // Rerendering starts from a clean directory
        assert_eq!(prepare_output_dir(&dir).unwrap(), 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
