//! Static scene setup: lights, atmosphere, post-processing

use lumina_core::{Color, SceneConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub points: Vec<PointLight>,
}

/// Distant star shell behind the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Starfield {
    pub radius: f32,
    pub depth: f32,
    pub count: u32,
    pub factor: f32,
    pub saturation: f32,
    pub fade: bool,
    pub speed: f32,
}

/// Floating dust around the subject
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkles {
    pub count: u32,
    pub scale: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bloom {
    pub intensity: f32,
    pub luminance_threshold: f32,
    pub luminance_smoothing: f32,
    pub mipmap_blur: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    pub offset: f32,
    pub darkness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneMapping {
    Reinhard { exposure: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostEffects {
    pub bloom: Bloom,
    pub vignette: Vignette,
    pub tone_mapping: ToneMapping,
}

/// Everything the renderer sets up once before the first frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRig {
    pub background: Color,
    pub lighting: Lighting,
    pub stars: Starfield,
    /// Absent on the lighter preset
    pub sparkles: Option<Sparkles>,
    pub effects: PostEffects,
    pub antialias: bool,
    pub max_pixel_ratio: f32,
}

impl SceneRig {
    pub fn from_config(config: &SceneConfig) -> Self {
        let palette = &config.palette;
        Self {
            background: palette.background,
            lighting: Lighting {
                ambient_intensity: 0.2,
                points: vec![
                    PointLight {
                        position: [10.0, 10.0, 10.0],
                        color: palette.warm_white,
                        intensity: 1.0,
                    },
                    PointLight {
                        position: [-10.0, -10.0, -10.0],
                        color: palette.gold,
                        intensity: 0.5,
                    },
                ],
            },
            stars: Starfield {
                radius: 100.0,
                depth: 50.0,
                count: config.star_count,
                factor: 4.0,
                saturation: 0.0,
                fade: true,
                speed: 1.0,
            },
            sparkles: config.sparkles.then(|| Sparkles {
                count: 200,
                scale: 12.0,
                size: 2.0,
                speed: 0.4,
                opacity: 0.5,
                color: palette.champagne,
            }),
            effects: PostEffects {
                bloom: Bloom {
                    intensity: 1.5,
                    luminance_threshold: 0.2,
                    luminance_smoothing: 0.9,
                    mipmap_blur: true,
                },
                vignette: Vignette {
                    offset: 0.1,
                    darkness: 0.5,
                },
                tone_mapping: ToneMapping::Reinhard { exposure: 1.5 },
            },
            antialias: config.antialias,
            max_pixel_ratio: config.max_pixel_ratio,
        }
    }
}
