//! WGSL sources of the post-process stages.
//!
//! Every source draws a full-screen triangle from `vs_main` and samples the
//! previous stage through binding 0/1; uniforms sit at binding 2.

pub(crate) const FRAGMENT_ENTRY: &str = "fs_main";

macro_rules! fullscreen_shader {
    ($body:literal) => {
        concat!(
            "struct VsOut {\n",
            "    @builtin(position) position: vec4<f32>,\n",
            "    @location(0) uv: vec2<f32>,\n",
            "};\n",
            "\n",
            "@group(0) @binding(0) var src_texture: texture_2d<f32>;\n",
            "@group(0) @binding(1) var src_sampler: sampler;\n",
            "\n",
            "@vertex\n",
            "fn vs_main(@builtin(vertex_index) index: u32) -> VsOut {\n",
            "    let uv = vec2<f32>(f32((index << 1u) & 2u), f32(index & 2u));\n",
            "    var out: VsOut;\n",
            "    out.position = vec4<f32>(uv * vec2<f32>(2.0, -2.0) + vec2<f32>(-1.0, 1.0), 0.0, 1.0);\n",
            "    out.uv = uv;\n",
            "    return out;\n",
            "}\n",
            "\n",
            $body
        )
    };
}

pub(crate) const GRAYSCALE: &str = fullscreen_shader!(r#"
@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let c = textureSample(src_texture, src_sampler, in.uv);
    let l = dot(c.rgb, vec3<f32>(0.299, 0.587, 0.114));
    return vec4<f32>(vec3<f32>(l), c.a);
}
"#);

pub(crate) const EXPOSURE: &str = fullscreen_shader!(r#"
struct Params {
    exposure: f32,
};
@group(0) @binding(2) var<uniform> params: Params;

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let c = textureSample(src_texture, src_sampler, in.uv);
    return vec4<f32>(c.rgb * params.exposure, c.a);
}
"#);

pub(crate) const EDGE_KERNEL: &str = fullscreen_shader!(r#"
struct Params {
    resolution: vec2<f32>,
    kernel: u32,
};
@group(0) @binding(2) var<uniform> params: Params;

fn lum(uv: vec2<f32>, dx: f32, dy: f32) -> f32 {
    let texel = vec2<f32>(dx, dy) / params.resolution;
    return textureSample(src_texture, src_sampler, uv + texel).r;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    // 0 sobel, 1 prewitt, 2 scharr
    var side = 1.0;
    var mid = 2.0;
    if (params.kernel == 1u) {
        mid = 1.0;
    } else if (params.kernel == 2u) {
        side = 3.0;
        mid = 10.0;
    }
    let tl = lum(in.uv, -1.0, -1.0);
    let t = lum(in.uv, 0.0, -1.0);
    let tr = lum(in.uv, 1.0, -1.0);
    let l = lum(in.uv, -1.0, 0.0);
    let r = lum(in.uv, 1.0, 0.0);
    let bl = lum(in.uv, -1.0, 1.0);
    let b = lum(in.uv, 0.0, 1.0);
    let br = lum(in.uv, 1.0, 1.0);
    let gx = side * (tr + br - tl - bl) + mid * (r - l);
    let gy = side * (bl + br - tl - tr) + mid * (b - t);
    let g = sqrt(gx * gx + gy * gy);
    return vec4<f32>(vec3<f32>(g), 1.0);
}
"#);

pub(crate) const CANNY_GRADIENT: &str = fullscreen_shader!(r#"
struct Params {
    resolution: vec2<f32>,
    kernel: u32,
};
@group(0) @binding(2) var<uniform> params: Params;

fn lum(uv: vec2<f32>, dx: f32, dy: f32) -> f32 {
    return textureSample(src_texture, src_sampler, uv + vec2<f32>(dx, dy) / params.resolution).r;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    // 3x3 gaussian smoothed sobel; rg = gradient, b = magnitude
    let gx = (lum(in.uv, 1.0, -1.0) + 2.0 * lum(in.uv, 1.0, 0.0) + lum(in.uv, 1.0, 1.0))
           - (lum(in.uv, -1.0, -1.0) + 2.0 * lum(in.uv, -1.0, 0.0) + lum(in.uv, -1.0, 1.0));
    let gy = (lum(in.uv, -1.0, 1.0) + 2.0 * lum(in.uv, 0.0, 1.0) + lum(in.uv, 1.0, 1.0))
           - (lum(in.uv, -1.0, -1.0) + 2.0 * lum(in.uv, 0.0, -1.0) + lum(in.uv, 1.0, -1.0));
    let m = sqrt(gx * gx + gy * gy);
    return vec4<f32>(gx * 0.5 + 0.5, gy * 0.5 + 0.5, m, 1.0);
}
"#);

pub(crate) const CANNY_SUPPRESSION: &str = fullscreen_shader!(r#"
struct Params {
    resolution: vec2<f32>,
    kernel: u32,
};
@group(0) @binding(2) var<uniform> params: Params;

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let here = textureSample(src_texture, src_sampler, in.uv);
    let dir = normalize(here.rg * 2.0 - 1.0 + vec2<f32>(1e-5, 0.0));
    let step = dir / params.resolution;
    let ahead = textureSample(src_texture, src_sampler, in.uv + step).b;
    let behind = textureSample(src_texture, src_sampler, in.uv - step).b;
    var m = here.b;
    if (m < ahead || m < behind) {
        m = 0.0;
    }
    return vec4<f32>(vec3<f32>(m), 1.0);
}
"#);

pub(crate) const THRESHOLD: &str = fullscreen_shader!(r#"
struct Params {
    threshold: f32,
};
@group(0) @binding(2) var<uniform> params: Params;

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let v = textureSample(src_texture, src_sampler, in.uv).r;
    return vec4<f32>(vec3<f32>(step(params.threshold, v)), 1.0);
}
"#);
