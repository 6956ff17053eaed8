use anyhow::Context;
use log::*;
use phongtrace::config::{self, Command};
use phongtrace::example_scenes::make_reference_scene;
use phongtrace::renderer::Renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let (program, rest) = match args.split_first() {
        Some((program, rest)) => (program.as_str(), rest),
        None => ("phongtrace", &[][..]),
    };
    let opts = match config::parse_args(program, rest)? {
        Command::Render(opts) => opts,
        Command::Help(usage) => {
            print!("{}", usage);
            return Ok(());
        }
    };

    let scene = match &opts.scene {
        Some(path) => config::load_scene(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => make_reference_scene()?,
    };

    let image = Renderer.render(&scene, &opts.render)?;
    image
        .write(&opts.output, opts.quality)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    info!("wrote {}", opts.output.display());
    Ok(())
}
