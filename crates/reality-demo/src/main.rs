mod args;
mod scene;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use reality_engine::logging::init_logging;
use reality_engine::render::WgslShader;
use reality_engine::window::Runtime;

use crate::args::Args;
use crate::scene::ColorScene;

fn main() -> Result<()> {
    let config = Args::parse().into_config()?;
    init_logging(config.logging.clone());

    let shader = load_shader(config.scene.shader.as_deref())?;
    log::info!("using shader {}", shader.label());

    let scene = ColorScene::new(config.scene, shader);
    Runtime::run(config.runtime, config.gpu, scene)
}

/// The `--shader` file if one was given, otherwise the built-in shader.
///
/// Failures are returned, not logged; `main` reports them once on exit.
fn load_shader(path: Option<&Path>) -> Result<WgslShader> {
    match path {
        Some(path) => WgslShader::load(path)
            .with_context(|| format!("cannot use shader {}", path.display())),
        None => Ok(WgslShader::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_shader_file_validates() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/shaded.wgsl");
        let shader = WgslShader::load(path).unwrap();
        assert!(shader.label().ends_with("shaded.wgsl"));
    }

    #[test]
    fn no_shader_path_uses_builtin() {
        let shader = load_shader(None).unwrap();
        assert_eq!(shader.label(), WgslShader::builtin().label());
    }

    #[test]
    fn shader_error_carries_context_and_cause() {
        let err = load_shader(Some(Path::new("/nonexistent/shader.wgsl"))).unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain[0], "cannot use shader /nonexistent/shader.wgsl");
        assert!(chain[1].starts_with("failed to read shader"), "{chain:?}");
    }
}
