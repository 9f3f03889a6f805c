use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Parameters for one frame of the blob shader, in contract order.
///
/// Every field is finite. Pointer absence is carried by a sentinel value in
/// `pointer` since uniform blocks cannot express an optional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub viewport_size: Vec2,
    pub time: f32,
    pub complexity: f32,
    pub evolution: f32,
    pub trigger_elapsed: f32,
    pub pointer: Vec2,
    pub pointer_speed: f32,
}

/// Colors for one frame; not part of the shape contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub fill: Vec3,
    pub background: Vec3,
}

/// GPU layout of [`FrameUniforms`] plus [`Paint`].
/// Must match `struct Uniforms` in `shaders/blob.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShaderUniforms {
    pub viewport_size: [f32; 2], // offset 0
    pub time: f32,               // offset 8
    pub complexity: f32,         // offset 12
    pub evolution: f32,          // offset 16
    pub trigger_elapsed: f32,    // offset 20
    pub pointer: [f32; 2],       // offset 24
    pub pointer_speed: f32,      // offset 32
    pub _pad0: f32,              // offset 36
    pub _pad1: [f32; 2],         // offset 40, vec4 below needs 16-byte alignment
    pub fill: [f32; 4],          // offset 48
    pub background: [f32; 4],    // offset 64 -> total 80
}

impl ShaderUniforms {
    pub fn pack(frame: &FrameUniforms, paint: &Paint) -> Self {
        Self {
            viewport_size: frame.viewport_size.to_array(),
            time: frame.time,
            complexity: frame.complexity,
            evolution: frame.evolution,
            trigger_elapsed: frame.trigger_elapsed,
            pointer: frame.pointer.to_array(),
            pointer_speed: frame.pointer_speed,
            _pad0: 0.0,
            _pad1: [0.0; 2],
            fill: paint.fill.extend(1.0).to_array(),
            background: paint.background.extend(1.0).to_array(),
        }
    }
}
