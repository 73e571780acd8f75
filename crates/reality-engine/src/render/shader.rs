use std::path::{Path, PathBuf};

use naga::valid::{Capabilities, ValidationFlags, Validator};
use thiserror::Error;

/// Vertex entry point every shader must define.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Fragment entry point every shader must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Size of the color uniform the renderer binds at group 0, binding 0.
const COLOR_UNIFORM_SIZE: u32 = 16;

const BUILTIN_LABEL: &str = "builtin generic.wgsl";
const BUILTIN_SOURCE: &str = include_str!("shaders/generic.wgsl");

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read shader {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader {label} failed to parse:\n{diagnostic}")]
    Parse { label: String, diagnostic: String },
    #[error("shader {label} failed validation: {diagnostic}")]
    Validation { label: String, diagnostic: String },
    #[error("shader {label} has no {stage} entry point named `{name}`")]
    MissingEntryPoint {
        label: String,
        stage: &'static str,
        name: &'static str,
    },
    #[error("shader {label} does not match the mesh pipeline: {reason}")]
    Interface { label: String, reason: String },
}

/// WGSL source that has been parsed and validated on the CPU.
///
/// Holding one means `create_module` will not raise a device error for bad
/// source; diagnostics are reported here instead, with source spans.
#[derive(Debug, Clone)]
pub struct WgslShader {
    label: String,
    source: String,
}

impl WgslShader {
    /// The flat-color shader compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            label: BUILTIN_LABEL.to_string(),
            source: BUILTIN_SOURCE.to_string(),
        }
    }

    /// Reads and validates a WGSL file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_wgsl(path.display().to_string(), source)
    }

    /// Validates in-memory WGSL.
    pub fn from_wgsl(label: impl Into<String>, source: impl Into<String>) -> Result<Self, ShaderError> {
        let label = label.into();
        let source = source.into();

        let module = naga::front::wgsl::parse_str(&source).map_err(|e| ShaderError::Parse {
            diagnostic: e.emit_to_string(&source),
            label: label.clone(),
        })?;

        Validator::new(ValidationFlags::all(), Capabilities::empty())
            .validate(&module)
            .map_err(|e| ShaderError::Validation {
                diagnostic: e.into_inner().to_string(),
                label: label.clone(),
            })?;

        for (stage, name, kind) in [
            (naga::ShaderStage::Vertex, VERTEX_ENTRY, "vertex"),
            (naga::ShaderStage::Fragment, FRAGMENT_ENTRY, "fragment"),
        ] {
            let found = module
                .entry_points
                .iter()
                .any(|ep| ep.stage == stage && ep.name == name);
            if !found {
                return Err(ShaderError::MissingEntryPoint {
                    label,
                    stage: kind,
                    name,
                });
            }
        }

        check_interface(&module).map_err(|reason| ShaderError::Interface {
            label: label.clone(),
            reason,
        })?;

        log::debug!("shader {label} validated ({} entry points)", module.entry_points.len());
        Ok(Self { label, source })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&self.label),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        })
    }
}

/// Checks the module against what `MeshRenderer` provides: one vertex buffer
/// with a `vec2<f32>` at location 0, and a 16-byte uniform at group 0, binding 0.
fn check_interface(module: &naga::Module) -> Result<(), String> {
    for (_, var) in module.global_variables.iter() {
        let Some(rb) = &var.binding else { continue };
        let name = var.name.as_deref().unwrap_or("<unnamed>");

        if (rb.group, rb.binding) != (0, 0) {
            return Err(format!(
                "`{name}` is bound at @group({}) @binding({}); only @group(0) @binding(0) is provided",
                rb.group, rb.binding
            ));
        }
        if var.space != naga::AddressSpace::Uniform {
            return Err(format!("`{name}` at @group(0) @binding(0) must be a uniform"));
        }
        let size = module.types[var.ty].inner.size(module.to_ctx());
        if size > COLOR_UNIFORM_SIZE {
            return Err(format!(
                "`{name}` is {size} bytes; the color uniform is {COLOR_UNIFORM_SIZE}"
            ));
        }
    }

    let Some(vs) = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga::ShaderStage::Vertex && ep.name == VERTEX_ENTRY)
    else {
        return Ok(());
    };

    // Struct arguments carry their bindings on the members.
    let mut inputs = Vec::new();
    for arg in &vs.function.arguments {
        match (&arg.binding, &module.types[arg.ty].inner) {
            (Some(binding), _) => inputs.push((binding, arg.ty)),
            (None, naga::TypeInner::Struct { members, .. }) => inputs.extend(
                members
                    .iter()
                    .filter_map(|m| m.binding.as_ref().map(|b| (b, m.ty))),
            ),
            (None, _) => {}
        }
    }

    for (binding, ty) in inputs {
        match binding {
            naga::Binding::BuiltIn(_) => {}
            naga::Binding::Location { location: 0, .. } if is_vec2_f32(&module.types[ty].inner) => {}
            naga::Binding::Location { location: 0, .. } => {
                return Err(format!("{VERTEX_ENTRY} input at @location(0) must be vec2<f32>"));
            }
            naga::Binding::Location { location, .. } => {
                return Err(format!(
                    "{VERTEX_ENTRY} reads @location({location}); only @location(0) is provided"
                ));
            }
        }
    }

    Ok(())
}

fn is_vec2_f32(inner: &naga::TypeInner) -> bool {
    matches!(
        inner,
        naga::TypeInner::Vector { size: naga::VectorSize::Bi, scalar }
            if *scalar == naga::Scalar::F32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_validates() {
        let builtin = WgslShader::builtin();
        let checked = WgslShader::from_wgsl(builtin.label(), builtin.source()).unwrap();
        assert_eq!(checked.source(), BUILTIN_SOURCE);
    }

    #[test]
    fn syntax_error_reports_diagnostic() {
        let err = WgslShader::from_wgsl("broken", "fn vs_main( {").unwrap_err();
        match err {
            ShaderError::Parse { label, diagnostic } => {
                assert_eq!(label, "broken");
                assert!(!diagnostic.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_fragment_entry_is_rejected() {
        let src = "@vertex fn vs_main() -> @builtin(position) vec4<f32> { return vec4<f32>(0.0); }";
        let err = WgslShader::from_wgsl("vs-only", src).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::MissingEntryPoint { stage: "fragment", name: FRAGMENT_ENTRY, .. }
        ));
    }

    #[test]
    fn type_error_fails_validation() {
        let src = "
            @vertex fn vs_main() -> @builtin(position) vec4<f32> { return vec4<f32>(0.0); }
            @fragment fn fs_main() -> @location(0) vec4<f32> { let x: f32 = 1u; return vec4<f32>(x); }
        ";
        let err = WgslShader::from_wgsl("typed", src).unwrap_err();
        assert!(matches!(err, ShaderError::Parse { .. } | ShaderError::Validation { .. }));
    }

    // ── interface ─────────────────────────────────────────────────────────

    const FS_MAIN: &str =
        "@fragment fn fs_main() -> @location(0) vec4<f32> { return vec4<f32>(1.0); }";

    fn interface_reason(src: &str) -> String {
        match WgslShader::from_wgsl("iface", src).unwrap_err() {
            ShaderError::Interface { label, reason } => {
                assert_eq!(label, "iface");
                reason
            }
            other => panic!("expected interface error, got {other:?}"),
        }
    }

    #[test]
    fn uniform_outside_binding_zero_is_rejected() {
        let src = "
            struct C { rgba: vec4<f32> };
            @group(0) @binding(3) var<uniform> u_color: C;
            @vertex fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(pos, 0.0, 1.0);
            }
            @fragment fn fs_main() -> @location(0) vec4<f32> { return u_color.rgba; }
        ";
        let reason = interface_reason(src);
        assert!(reason.contains("@binding(3)"), "{reason}");
    }

    #[test]
    fn storage_buffer_at_binding_zero_is_rejected() {
        let src = "
            @group(0) @binding(0) var<storage, read> colors: array<vec4<f32>>;
            @vertex fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(pos, 0.0, 1.0);
            }
            @fragment fn fs_main() -> @location(0) vec4<f32> { return colors[0]; }
        ";
        let reason = interface_reason(src);
        assert!(reason.contains("must be a uniform"), "{reason}");
    }

    #[test]
    fn oversized_uniform_is_rejected() {
        let src = "
            struct Big { a: vec4<f32>, b: vec4<f32> };
            @group(0) @binding(0) var<uniform> u_big: Big;
            @vertex fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(pos, 0.0, 1.0);
            }
            @fragment fn fs_main() -> @location(0) vec4<f32> { return u_big.a + u_big.b; }
        ";
        let reason = interface_reason(src);
        assert!(reason.contains("32 bytes"), "{reason}");
    }

    #[test]
    fn wide_position_input_is_rejected() {
        let src = format!(
            "
            @vertex fn vs_main(@location(0) pos: vec4<f32>) -> @builtin(position) vec4<f32> {{
                return pos;
            }}
            {FS_MAIN}
            "
        );
        let reason = interface_reason(&src);
        assert!(reason.contains("must be vec2<f32>"), "{reason}");
    }

    #[test]
    fn extra_vertex_location_is_rejected() {
        let src = format!(
            "
            @vertex fn vs_main(
                @location(0) pos: vec2<f32>,
                @location(1) uv: vec2<f32>,
            ) -> @builtin(position) vec4<f32> {{
                return vec4<f32>(pos + uv, 0.0, 1.0);
            }}
            {FS_MAIN}
            "
        );
        let reason = interface_reason(&src);
        assert!(reason.contains("@location(1)"), "{reason}");
    }

    #[test]
    fn struct_input_and_builtins_are_accepted() {
        let src = format!(
            "
            struct VsIn {{
                @builtin(vertex_index) index: u32,
                @location(0) pos: vec2<f32>,
            }};
            @vertex fn vs_main(in: VsIn) -> @builtin(position) vec4<f32> {{
                return vec4<f32>(in.pos, f32(in.index) * 0.0, 1.0);
            }}
            {FS_MAIN}
            "
        );
        assert!(WgslShader::from_wgsl("struct-in", src).is_ok());
    }

    // ── io ────────────────────────────────────────────────────────────────

    #[test]
    fn missing_file_is_io_error() {
        let err = WgslShader::load("/nonexistent/shader.wgsl").unwrap_err();
        assert!(matches!(err, ShaderError::Io { .. }));
    }
}
