use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use winit::dpi::LogicalSize;

use reality_engine::device::GpuInit;
use reality_engine::logging::{GpuVerbosity, LoggingConfig};
use reality_engine::mesh::Mesh;
use reality_engine::paint::{Color, Overflow, Rotation};
use reality_engine::window::{RuntimeConfig, WindowMode};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "reality", version, about = "Draws a mesh whose color cycles every frame")]
pub struct Args {
    /// Window title.
    #[arg(long, default_value = "Turquoise Triangle")]
    pub title: String,

    /// Window sizing.
    #[arg(long, value_enum, default_value_t = WindowArg::HalfMonitor)]
    pub window: WindowArg,

    /// Mesh to draw.
    #[arg(long, value_enum, default_value_t = MeshArg::Triangle)]
    pub mesh: MeshArg,

    /// WGSL file to use instead of the built-in shader.
    #[arg(long)]
    pub shader: Option<PathBuf>,

    /// Overflow policy for channels above 1.0: unchecked, wrap or digit.
    #[arg(long, default_value = "wrap")]
    pub overflow: Overflow,

    /// Named color the cycle starts from.
    #[arg(long, value_enum, default_value_t = StartColor::Black)]
    pub start: StartColor,

    /// Per-frame rotation as `r,g,b`.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [0.001f32, 0.0012, 0.00016]
    )]
    pub delta: Vec<f32>,

    /// Degrees per frame to spin the mesh about the origin.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub spin: f32,

    /// Enable backend validation layers.
    #[arg(long)]
    pub validation: bool,

    /// How much graphics-stack logging to show.
    #[arg(long, value_enum, default_value_t = GpuLogArg::Warnings)]
    pub gpu_log: GpuLogArg,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum WindowArg {
    Windowed,
    HalfMonitor,
    Fullscreen,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum MeshArg {
    Triangle,
    Quad,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum StartColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
}

impl From<StartColor> for Color {
    fn from(c: StartColor) -> Self {
        match c {
            StartColor::Black => Color::BLACK,
            StartColor::White => Color::WHITE,
            StartColor::Red => Color::RED,
            StartColor::Green => Color::GREEN,
            StartColor::Blue => Color::BLUE,
            StartColor::Yellow => Color::YELLOW,
            StartColor::Purple => Color::PURPLE,
            StartColor::Cyan => Color::CYAN,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum GpuLogArg {
    All,
    Warnings,
    Off,
}

/// Per-frame scene parameters.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub mesh: Mesh,
    pub shader: Option<PathBuf>,
    pub start: Color,
    pub delta: Rotation,
    pub overflow: Overflow,
    pub spin_deg: f32,
}

/// Everything `main` needs, resolved from `Args`.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    pub scene: SceneConfig,
}

impl Args {
    pub fn into_config(self) -> Result<DemoConfig> {
        let [dr, dg, db] = self.delta[..] else {
            bail!("--delta takes exactly three values, got {}", self.delta.len());
        };
        if !(dr.is_finite() && dg.is_finite() && db.is_finite() && self.spin.is_finite()) {
            bail!("--delta and --spin must be finite numbers");
        }

        let mode = match self.window {
            WindowArg::Windowed => WindowMode::Windowed,
            WindowArg::HalfMonitor => WindowMode::HalfMonitor,
            WindowArg::Fullscreen => WindowMode::Fullscreen,
        };

        let gpu_verbosity = match self.gpu_log {
            GpuLogArg::All => GpuVerbosity::All,
            GpuLogArg::Warnings => GpuVerbosity::Warnings,
            GpuLogArg::Off => GpuVerbosity::Off,
        };

        let mesh = match self.mesh {
            MeshArg::Triangle => Mesh::triangle(),
            MeshArg::Quad => Mesh::quad(),
        };

        Ok(DemoConfig {
            runtime: RuntimeConfig {
                title: self.title,
                initial_size: LogicalSize::new(640.0, 480.0),
                mode,
            },
            gpu: GpuInit {
                validation: self.validation,
                ..GpuInit::default()
            },
            logging: LoggingConfig {
                gpu_verbosity,
                ..LoggingConfig::default()
            },
            scene: SceneConfig {
                mesh,
                shader: self.shader,
                start: self.start.into(),
                delta: Rotation::new(dr, dg, db),
                overflow: self.overflow,
                spin_deg: self.spin,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DemoConfig> {
        let mut argv = vec!["reality"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv)?.into_config()
    }

    #[test]
    fn defaults_match_the_original_demo() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.runtime.title, "Turquoise Triangle");
        assert_eq!(cfg.runtime.mode, WindowMode::HalfMonitor);
        assert_eq!(cfg.scene.start, Color::BLACK);
        assert_eq!(cfg.scene.delta, Rotation::new(0.001, 0.0012, 0.00016));
        assert_eq!(cfg.scene.overflow, Overflow::WrapByOne);
        assert_eq!(cfg.scene.mesh, Mesh::triangle());
        assert!(cfg.scene.shader.is_none());
        assert!(!cfg.gpu.validation);
        assert_eq!(cfg.logging.gpu_verbosity, GpuVerbosity::Warnings);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = parse(&[
            "--window",
            "fullscreen",
            "--mesh",
            "quad",
            "--overflow",
            "digit",
            "--start",
            "cyan",
            "--delta",
            "0.5,-0.25,0",
            "--spin",
            "2.5",
            "--shader",
            "shaders/generic.wgsl",
            "--validation",
            "--gpu-log",
            "all",
        ])
        .unwrap();

        assert_eq!(cfg.runtime.mode, WindowMode::Fullscreen);
        assert_eq!(cfg.scene.mesh, Mesh::quad());
        assert_eq!(cfg.scene.overflow, Overflow::DecimalDigit);
        assert_eq!(cfg.scene.start, Color::CYAN);
        assert_eq!(cfg.scene.delta, Rotation::new(0.5, -0.25, 0.0));
        assert_eq!(cfg.scene.spin_deg, 2.5);
        assert_eq!(cfg.scene.shader, Some(PathBuf::from("shaders/generic.wgsl")));
        assert!(cfg.gpu.validation);
        assert_eq!(cfg.logging.gpu_verbosity, GpuVerbosity::All);
    }

    #[test]
    fn wrong_delta_arity_is_rejected() {
        let err = parse(&["--delta", "0.1,0.2"]).unwrap_err();
        assert!(err.to_string().contains("exactly three"));
    }

    #[test]
    fn unknown_overflow_policy_is_rejected() {
        assert!(parse(&["--overflow", "clamp"]).is_err());
    }
}
