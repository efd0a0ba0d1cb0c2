//! Procedural textures for the planet and the nebula backdrop.
//!
//! Both textures are synthesized at startup from Perlin fBm, so the binary
//! carries no asset directory at all. Both samplers walk a circle in noise
//! space horizontally so the equirectangular wrap is seamless.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::Extent3d;
use bevy::render::render_resource::TextureDimension;
use bevy::render::render_resource::TextureFormat;
use noise::NoiseFn;
use noise::Perlin;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fractal Brownian motion over 2D Perlin noise, normalized to roughly
/// [-1, 1].
fn fbm(perlin: &Perlin, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut sum = 0.0;
    let mut norm = 0.0;
    for _ in 0..octaves {
        sum += amplitude * perlin.get([x * frequency, y * frequency]);
        norm += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }
    sum / norm
}

/// Banded gas-giant albedo: latitude bands warped by low-frequency noise,
/// blended across three blues.
pub fn planet_texture(seed: u32, width: u32, height: u32) -> Image {
    const DEEP: Vec3 = Vec3::new(0.07, 0.15, 0.52);
    const MID: Vec3 = Vec3::new(0.20, 0.38, 0.82);
    const PALE: Vec3 = Vec3::new(0.55, 0.72, 0.95);

    let perlin = Perlin::new(seed);
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        let v = f64::from(y) / f64::from(height);
        for x in 0..width {
            let u = f64::from(x) / f64::from(width);
            let angle = u * std::f64::consts::TAU;
            let (sx, sy) = (angle.cos(), angle.sin());

            let warp = fbm(&perlin, sx + v * 3.0, sy + v * 3.0, 4, 0.5, 2.0);
            let band = ((v * 9.0 + warp * 1.5) * std::f64::consts::PI).sin() * 0.5 + 0.5;
            let detail = fbm(&perlin, sx * 2.0, sy * 2.0 + v * 8.0, 4, 0.5, 2.0) * 0.5 + 0.5;

            let color = DEEP
                .lerp(MID, band as f32)
                .lerp(PALE, (detail * band) as f32 * 0.35);
            push_rgba(&mut data, color);
        }
    }

    image_from_rgba(data, width, height)
}

/// Dim nebula wisps with a sparse sprinkling of baked-in pinprick stars.
pub fn nebula_texture(seed: u32, width: u32, height: u32) -> Image {
    const SPACE: Vec3 = Vec3::new(0.01, 0.01, 0.03);
    const HAZE: Vec3 = Vec3::new(0.10, 0.07, 0.25);
    const GLOW: Vec3 = Vec3::new(0.16, 0.25, 0.42);

    let perlin = Perlin::new(seed);
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        let v = f64::from(y) / f64::from(height);
        for x in 0..width {
            let u = f64::from(x) / f64::from(width);
            let angle = u * std::f64::consts::TAU;
            let wisp = fbm(
                &perlin,
                angle.cos() * 2.0 + v * 4.0,
                angle.sin() * 2.0 + v * 4.0,
                5,
                0.55,
                2.1,
            ) * 0.5
                + 0.5;

            let color = SPACE
                .lerp(HAZE, wisp as f32)
                .lerp(GLOW, (wisp * wisp) as f32 * 0.6);
            push_rgba(&mut data, color);
        }
    }

    // Speckle pass, seeded so the sky is stable run to run.
    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    let speckles = (width * height / 600) as usize;
    for _ in 0..speckles {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let idx = ((y * width + x) * 4) as usize;
        let brightness: u8 = rng.random_range(140..=255);
        data[idx] = brightness;
        data[idx + 1] = brightness;
        data[idx + 2] = brightness.saturating_add(20);
    }

    image_from_rgba(data, width, height)
}

fn push_rgba(data: &mut Vec<u8>, color: Vec3) {
    data.push((color.x.clamp(0.0, 1.0) * 255.0) as u8);
    data.push((color.y.clamp(0.0, 1.0) * 255.0) as u8);
    data.push((color.z.clamp(0.0, 1.0) * 255.0) as u8);
    data.push(255);
}

fn image_from_rgba(data: Vec<u8>, width: u32, height: u32) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
