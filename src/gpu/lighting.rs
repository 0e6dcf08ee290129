use wgpu::util::DeviceExt;

use crate::options::LightingOptions;
use crate::scene::PointLight;

/// Point lights the shader can evaluate per fragment.
pub const MAX_LIGHTS: usize = 4;

/// One point light as the shader sees it.
/// NOTE: Must match WGSL `PointLight` layout exactly (32 bytes)
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPointLight {
    /// World-space position.
    pub position: [f32; 3],
    /// Cutoff distance (0 = unlimited).
    pub range: f32,
    /// Linear color.
    pub color: [f32; 3],
    /// Intensity after the global scale.
    pub intensity: f32,
}

/// Lighting configuration shared by the mesh shader.
/// NOTE: Must match WGSL struct layout exactly (144 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Active lights; only the first `light_count` are read.
    pub lights: [GpuPointLight; MAX_LIGHTS],
    /// Number of valid entries in `lights`.
    pub light_count: u32,
    /// Flat ambient term
    pub ambient: f32,
    /// Specular strength at roughness zero
    pub specular_intensity: f32,
    /// Pads the struct to a 16-byte multiple.
    pub(crate) _pad: f32,
}

impl LightingUniform {
    /// Pack the scene's lights. Lights past [`MAX_LIGHTS`] are dropped with
    /// a warning.
    #[must_use]
    pub fn from_scene(lights: &[PointLight], options: &LightingOptions) -> Self {
        if lights.len() > MAX_LIGHTS {
            log::warn!(
                "scene has {} lights, only the first {MAX_LIGHTS} are shaded",
                lights.len()
            );
        }
        let mut packed = [GpuPointLight::default(); MAX_LIGHTS];
        for (slot, light) in packed.iter_mut().zip(lights) {
            *slot = GpuPointLight {
                position: light.position.to_array(),
                range: light.range.max(0.0),
                color: light.color.to_array(),
                intensity: light.intensity * options.intensity_scale,
            };
        }
        Self {
            lights: packed,
            light_count: lights.len().min(MAX_LIGHTS) as u32,
            ambient: options.ambient,
            specular_intensity: options.specular_intensity,
            _pad: 0.0,
        }
    }
}

/// Lighting uniform buffer and its bind group.
pub struct Lighting {
    /// CPU copy of what was last uploaded.
    pub uniform: LightingUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 1 in the mesh pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Upload `uniform` and build its bind group.
    #[must_use]
    pub fn new(device: &wgpu::Device, uniform: LightingUniform) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Lighting Bind Group"),
        });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Replace the uniform and upload it if it changed.
    pub fn update(&mut self, queue: &wgpu::Queue, uniform: LightingUniform) {
        if uniform != self.uniform {
            self.uniform = uniform;
            queue.write_buffer(
                &self.buffer,
                0,
                bytemuck::cast_slice(&[self.uniform]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::SceneLayout;

    #[test]
    fn layouts_match_wgsl_sizes() {
        assert_eq!(size_of::<GpuPointLight>(), 32);
        assert_eq!(size_of::<LightingUniform>(), 144);
    }

    #[test]
    fn packs_layout_lights_with_scaled_intensity() {
        let layout = SceneLayout::classic();
        let options = LightingOptions {
            intensity_scale: 0.5,
            ..LightingOptions::default()
        };
        let uniform = LightingUniform::from_scene(&layout.lights, &options);

        assert_eq!(uniform.light_count, 4);
        assert_eq!(uniform.lights[0].position, [0.0, 20.0, 10.0]);
        assert!((uniform.lights[0].intensity - 50.0).abs() < 1e-6);
        let red = uniform.lights[1].color;
        assert!((red[0] - 1.0).abs() < 1e-5 && red[1] == 0.0 && red[2] == 0.0);
        assert!((uniform.ambient - options.ambient).abs() < 1e-6);
    }

    #[test]
    fn extra_lights_are_truncated() {
        let lights: Vec<PointLight> = (0..6)
            .map(|i| PointLight::new(0xffffff, 1.0, 10.0, Vec3::splat(i as f32)))
            .collect();
        let uniform =
            LightingUniform::from_scene(&lights, &LightingOptions::default());
        assert_eq!(uniform.light_count, MAX_LIGHTS as u32);
        assert_eq!(uniform.lights[3].position, [3.0, 3.0, 3.0]);
    }

    #[test]
    fn no_lights_leaves_ambient_only() {
        let uniform = LightingUniform::from_scene(&[], &LightingOptions::default());
        assert_eq!(uniform.light_count, 0);
        assert_eq!(uniform.lights, [GpuPointLight::default(); MAX_LIGHTS]);
    }
}
