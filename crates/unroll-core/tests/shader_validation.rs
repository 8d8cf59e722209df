//! Generated fragments must be valid WGSL once pasted into a fragment shader
//!
//! The harness mirrors the feedback shader's bindings: `prev_tex`/`prev_samp`
//! for the previous frame, `uv` from the vertex stage and `out_val` as the
//! accumulated colour.

use unroll_core::{DEFAULT_WEIGHTS, Mode, Resolution, emit};

fn harness(fragment: &str) -> String {
    format!(
        r#"
@group(0) @binding(0) var prev_tex: texture_2d<f32>;
@group(0) @binding(1) var prev_samp: sampler;

@fragment
fn fragment(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {{
    var out_val = textureSample(prev_tex, prev_samp, uv) * 6.76;
{fragment}
    return out_val;
}}
"#
    )
}

fn validate(src: &str) {
    let module = naga::front::wgsl::parse_str(src).unwrap_or_else(|e| {
        panic!("{}", e.emit_to_string(src));
    });
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    if let Err(e) = validator.validate(&module) {
        panic!("{}", e.emit_to_string(src));
    }
}

fn check(resolution: Resolution, mode: Mode) {
    let fragment = emit(&DEFAULT_WEIGHTS, resolution, mode).unwrap().collect_string();
    validate(&harness(&fragment));
}

#[test]
fn test_baked_fragment_is_valid_wgsl() {
    check(Resolution::PerAxis { x: 1024, y: 1024 }, Mode::Baked);
}

#[test]
fn test_calculated_fragment_is_valid_wgsl() {
    check(Resolution::Uniform(1024), Mode::Calculated);
}

#[test]
fn test_non_uniform_fragments_are_valid_wgsl() {
    check(Resolution::PerAxis { x: 1920, y: 1080 }, Mode::Baked);
    check(Resolution::PerAxis { x: 1920, y: 1080 }, Mode::Calculated);
}

#[test]
fn test_tiny_offsets_are_valid_wgsl() {
    check(Resolution::Uniform(1 << 20), Mode::Baked);
}
