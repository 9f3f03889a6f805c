use glam::Vec3;

// Shared tuning constants for the blob pipeline. `Tuning::default()` is built
// from these; the host never reads them directly.

// Morph targets
pub const COMPLEXITY_DEFAULT: f32 = 3.0; // complexity before the first morph
pub const COMPLEXITY_MIN: f32 = 2.0;
pub const COMPLEXITY_MAX: f32 = 8.0;
pub const EVOLUTION_STEP_MIN: f32 = 40.0; // added to the accumulator per morph
pub const EVOLUTION_STEP_MAX: f32 = 50.0;

// Morph spring (unit mass)
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 12.0;
// Evolution is critically damped (2 * sqrt(k)) so it never runs backwards
pub const EVOLUTION_SPRING_DAMPING: f32 = 20.0;

// Pointer speed smoothing
pub const POINTER_SPEED_BLEND: f32 = 0.3; // new = old * (1 - a) + d * a
pub const POINTER_EXIT_DECAY: f32 = 0.1; // one-shot factor applied on exit

// Time feed wraps here to keep f32 precision bounded
pub const TIME_PERIOD_SECS: f64 = 2000.0;

// Pointer absent marker, far outside the normalized [-1, 1] shape space
pub const POINTER_SENTINEL: [f32; 2] = [-99.0, -99.0];

// Reported as trigger elapsed before the first morph
pub const IDLE_TRIGGER_ELAPSED_SECS: f32 = 1.0e6;

// Theme cross-fade duration
pub const THEME_FADE_SECS: f32 = 1.2;

// Palettes
pub const DARK_PALETTE: [[f32; 3]; 3] = [
    [0.55, 0.35, 0.90], // violet
    [0.85, 0.25, 0.55], // magenta
    [0.20, 0.75, 0.65], // teal
];

pub const LIGHT_PALETTE: [[f32; 3]; 3] = [
    [0.15, 0.00, 0.05], // near-black plum
    [0.25, 0.00, 0.00], // oxblood
    [0.35, 0.00, 0.00], // maroon
];

pub const FALLBACK_COLOR: [f32; 3] = [0.15, 0.55, 0.85]; // used if a palette is empty

#[inline]
pub fn fallback_color_vec3() -> Vec3 {
    Vec3::from(FALLBACK_COLOR)
}
