use super::Scene;
use crate::{
    lights::Light,
    materials::Material,
    math::{vec3, Color, Vec3},
    shapes::{Geometry, Sphere},
};

fn rgb(r: f64, g: f64, b: f64) -> Color<f64> {
    Color::new(r, g, b, 1.0)
}

fn sphere(
    center: Vec3<f64>,
    radius: f64,
    (ambient, diffuse, specular, shininess): (Color<f64>, Color<f64>, Color<f64>, f64),
    color: Color<f64>,
) -> Geometry {
    Sphere::new(
        center,
        radius,
        Material::new(ambient, diffuse, specular, shininess),
        color,
    )
    .into()
}

impl Scene {
    /// The demo scene: eight spheres lit by a red, a green and a blue light.
    pub fn builtin(background: Color<f64>) -> Self {
        let geometries = vec![
            sphere(
                vec3(-50.0, -25.0, 175.0),
                30.0,
                (rgb(0.1, 0.0, 0.0), rgb(0.3, 0.0, 0.0), rgb(0.5, 0.0, 0.0), 1.0),
                rgb(0.2, 0.2, 0.2),
            ),
            sphere(
                vec3(-10.0, 0.0, 100.0),
                10.0,
                (rgb(0.1, 0.1, 0.0), rgb(0.3, 0.3, 0.0), rgb(0.5, 0.5, 0.0), 2.0),
                rgb(0.8, 0.8, 0.0),
            ),
            sphere(
                vec3(0.0, 0.0, 200.0),
                40.0,
                (rgb(0.0, 0.1, 0.0), rgb(0.0, 0.3, 0.0), rgb(0.0, 0.5, 0.5), 5.0),
                rgb(0.0, 0.8, 0.0),
            ),
            sphere(
                vec3(0.0, -50.0, 200.0),
                10.0,
                (rgb(0.1, 0.1, 0.1), rgb(0.3, 0.3, 0.3), rgb(0.5, 0.5, 0.5), 10.0),
                rgb(0.8, 0.8, 0.8),
            ),
            sphere(
                vec3(10.0, 0.0, 20.0),
                5.0,
                (rgb(0.0, 0.1, 0.1), rgb(0.0, 0.3, 0.3), rgb(0.0, 0.5, 0.5), 100.0),
                rgb(0.0, 0.8, 0.8),
            ),
            sphere(
                vec3(-70.0, 0.0, 100.0),
                10.0,
                (rgb(0.1, 0.0, 0.1), rgb(0.3, 0.0, 0.3), rgb(0.5, 0.0, 0.5), 150.0),
                rgb(0.8, 0.0, 0.8),
            ),
            sphere(
                vec3(50.0, 25.0, 75.0),
                50.0,
                (rgb(0.0, 0.0, 0.1), rgb(0.0, 0.0, 0.3), rgb(0.0, 0.0, 0.5), 255.0),
                rgb(0.0, 0.0, 0.8),
            ),
            sphere(
                vec3(-75.0, 15.0, -75.0),
                5.0,
                (rgb(0.07, 0.07, 0.07), rgb(0.2, 0.2, 0.2), rgb(0.3, 0.4, 0.4), 1.0),
                rgb(0.07, 0.07, 0.07),
            ),
        ];

        let lights = vec![
            Light::uniform(vec3(-50.0, 0.0, 0.0), rgb(1.0, 0.0, 0.0), 1.0),
            Light::uniform(vec3(20.0, 20.0, 0.0), rgb(0.0, 1.0, 0.0), 1.0),
            Light::uniform(vec3(0.0, 0.0, 300.0), rgb(0.0, 0.0, 1.0), 1.0),
        ];

        Scene::new("builtin", geometries, lights, background)
    }
}
