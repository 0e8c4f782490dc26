mod cli;

use clap::Parser;
use log::LevelFilter;

use cli::Args;
use tracer::{
    expect,
    renderer::{prepare_output_dir, Renderer},
    scene::Scene,
    settings::RenderSettings,
    tracer_error, tracer_info,
};

fn setup_logger(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("tracer.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(why) = setup_logger(args.log_level.clone().into()) {
        panic!("{}", why);
    };

    let mut settings = match &args.settings {
        Some(path) => expect!(RenderSettings::load(path), "Failed to load settings"),
        None => RenderSettings::default(),
    };
    args.apply(&mut settings);
    expect!(settings.validate(), "Invalid settings");

    let (scene, _) = expect!(
        Scene::from_settings(&settings.scene, settings.background()),
        "Scene loading failed"
    );

    expect!(
        prepare_output_dir(&args.output),
        "Failed to prepare the output directory"
    );

    let renderer = expect!(Renderer::new(settings.threads), "Failed to start renderer");
    let results = expect!(
        renderer.render_animation(&scene, &settings, &args.output),
        "Render failed"
    );

    let mut failed = 0;
    for (frame, result) in results.iter().enumerate() {
        if let Err(why) = result {
            tracer_error!("Frame {} failed: {}", frame + 1, why);
            failed += 1;
        }
    }

    if failed > 0 {
        tracer_error!("{}/{} frames failed", failed, results.len());
        std::process::exit(1);
    }

    tracer_info!("Frames written to '{}'", args.output.to_string_lossy());
}
