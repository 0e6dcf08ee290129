//! Forward renderer for the scene's lit meshes.
//!
//! One pipeline draws every object. Meshes are generated and uploaded the
//! first time a shape is seen; per-object transforms and materials live in
//! one dynamic-offset uniform buffer rewritten each frame.

use std::num::NonZeroU64;

use glam::Mat4;
use wgpu::util::DeviceExt;

use super::dynamic_buffer::DynamicBuffer;
use super::lighting::{Lighting, LightingUniform};
use super::render_context::RenderContext;
use super::texture::DepthTexture;
use crate::camera::{Camera, CameraUniform};
use crate::engine::FrameRenderer;
use crate::error::TumbleError;
use crate::mesh::{self, MeshVertex};
use crate::options::{LightingOptions, Options};
use crate::scene::{Color, Scene, ShapeKind, VisualObject};

/// Per-object shader data.
/// NOTE: Must match WGSL `Object` layout exactly (144 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// Model matrix.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix, for normals.
    pub normal: [[f32; 4]; 4],
    /// Linear base color.
    pub color: [f32; 3],
    /// Material roughness.
    pub roughness: f32,
}

impl ObjectUniform {
    /// Shader data for one object.
    ///
    /// A collapsed object (any scale axis at zero, as during grow-in) has no
    /// inverse; its normal matrix falls back to identity.
    #[must_use]
    pub fn from_object(obj: &VisualObject) -> Self {
        let model = obj.model_matrix();
        let normal = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            color: obj.material.color.to_array(),
            roughness: obj.material.roughness,
        }
    }
}

/// Vertex and index buffers for one shape.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, shape: &ShapeKind) -> Self {
        let data = mesh::generate(shape);
        log::debug!(
            "uploading {} mesh: {} vertices, {} indices",
            shape.name(),
            data.vertices.len(),
            data.indices.len()
        );
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.index_count(),
        }
    }
}

/// Draws a [`Scene`] into the window surface.
pub struct MeshRenderer {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,

    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    lighting: Lighting,
    lighting_options: LightingOptions,

    object_layout: wgpu::BindGroupLayout,
    object_buffer: DynamicBuffer,
    object_bind_group: wgpu::BindGroup,
    object_stride: usize,
    staging: Vec<u8>,

    meshes: Vec<(ShapeKind, GpuMesh)>,
    mesh_slots: Vec<usize>,
    depth: DepthTexture,
    clear_color: wgpu::Color,
}

fn uniform_layout_entry(
    visibility: wgpu::ShaderStages,
    dynamic: Option<NonZeroU64>,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: dynamic.is_some(),
            min_binding_size: dynamic,
        },
        count: None,
    }
}

fn to_wgpu_color(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(c.r),
        g: f64::from(c.g),
        b: f64::from(c.b),
        a: 1.0,
    }
}

impl MeshRenderer {
    /// Build the pipeline and fixed resources on top of `context`.
    #[must_use]
    pub fn new(context: RenderContext, options: &Options) -> Self {
        let device = &context.device;

        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/mesh.wgsl"));

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[uniform_layout_entry(
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                    None,
                )],
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let lighting = Lighting::new(
            device,
            LightingUniform::from_scene(&[], &options.lighting),
        );

        let object_size = size_of::<ObjectUniform>();
        let alignment =
            device.limits().min_uniform_buffer_offset_alignment as usize;
        let object_stride = object_size.div_ceil(alignment) * alignment;
        let object_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Object Bind Group Layout"),
                entries: &[uniform_layout_entry(
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                    NonZeroU64::new(object_size as u64),
                )],
            });
        let object_buffer = DynamicBuffer::new(
            device,
            "Object Uniform Buffer",
            object_stride * 8,
            wgpu::BufferUsages::UNIFORM,
        );
        let object_bind_group =
            Self::create_object_bind_group(device, &object_layout, &object_buffer);

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Mesh Pipeline Layout"),
                bind_group_layouts: &[
                    &camera_layout,
                    &lighting.layout,
                    &object_layout,
                ],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Mesh Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[MeshVertex::LAYOUT],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(DepthTexture::stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let (width, height) = context.size();
        let depth = DepthTexture::new(device, width, height);

        Self {
            pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            lighting,
            lighting_options: options.lighting.clone(),
            object_layout,
            object_buffer,
            object_bind_group,
            object_stride,
            staging: Vec::new(),
            meshes: Vec::new(),
            mesh_slots: Vec::new(),
            depth,
            clear_color: to_wgpu_color(options.scene.background),
            context,
        }
    }

    fn create_object_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &DynamicBuffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: buffer.buffer(),
                    offset: 0,
                    size: NonZeroU64::new(size_of::<ObjectUniform>() as u64),
                }),
            }],
        })
    }

    /// Index into the mesh cache for `shape`, uploading it on first use.
    fn mesh_slot(&mut self, shape: &ShapeKind) -> usize {
        if let Some(i) = self.meshes.iter().position(|(s, _)| s == shape) {
            return i;
        }
        let mesh = GpuMesh::upload(&self.context.device, shape);
        self.meshes.push((*shape, mesh));
        self.meshes.len() - 1
    }

    /// Write camera, lights and per-object uniforms for this frame.
    fn prepare(&mut self, scene: &Scene, camera: &Camera) {
        let queue = &self.context.queue;
        self.camera_uniform.update_view_proj(camera);
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        self.lighting.update(
            queue,
            LightingUniform::from_scene(scene.lights(), &self.lighting_options),
        );

        self.mesh_slots.clear();
        for obj in scene.objects() {
            let slot = self.mesh_slot(&obj.shape);
            self.mesh_slots.push(slot);
        }

        self.staging.clear();
        self.staging.resize(scene.len() * self.object_stride, 0);
        for (chunk, obj) in self
            .staging
            .chunks_exact_mut(self.object_stride)
            .zip(scene.objects())
        {
            let uniform = ObjectUniform::from_object(obj);
            chunk[..size_of::<ObjectUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&uniform));
        }
        if self.object_buffer.write_bytes(
            &self.context.device,
            &self.context.queue,
            &self.staging,
        ) {
            self.object_bind_group = Self::create_object_bind_group(
                &self.context.device,
                &self.object_layout,
                &self.object_buffer,
            );
        }
    }
}

impl FrameRenderer for MeshRenderer {
    fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), TumbleError> {
        self.prepare(scene, camera);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

            rp.set_pipeline(&self.pipeline);
            rp.set_bind_group(0, &self.camera_bind_group, &[]);
            rp.set_bind_group(1, &self.lighting.bind_group, &[]);
            for (i, &slot) in self.mesh_slots.iter().enumerate() {
                let mesh = &self.meshes[slot].1;
                if mesh.index_count == 0 {
                    continue;
                }
                let offset = (i * self.object_stride) as u32;
                rp.set_bind_group(2, &self.object_bind_group, &[offset]);
                rp.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rp.set_index_buffer(
                    mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rp.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        let (width, height) = self.context.size();
        self.depth = DepthTexture::new(&self.context.device, width, height);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;
    use crate::scene::Material;

    fn object() -> VisualObject {
        VisualObject::new(
            ShapeKind::Sphere {
                radius: 3.0,
                width_segments: 8,
                height_segments: 8,
            },
            Material {
                color: Color::new(0.2, 0.4, 0.6),
                roughness: 0.5,
            },
            Vec3::new(-10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn object_uniform_matches_wgsl_size() {
        assert_eq!(size_of::<ObjectUniform>(), 144);
    }

    #[test]
    fn carries_material_and_translation() {
        let u = ObjectUniform::from_object(&object());
        assert_eq!(u.color, [0.2, 0.4, 0.6]);
        assert_eq!(u.roughness, 0.5);
        assert_eq!(u.model[3], [-10.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn collapsed_object_gets_identity_normal_matrix() {
        let mut obj = object();
        obj.scale = Vec3::ZERO;
        let u = ObjectUniform::from_object(&obj);
        assert_eq!(u.normal, Mat4::IDENTITY.to_cols_array_2d());
        assert!(u.normal.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn non_uniform_scale_keeps_normals_perpendicular() {
        let mut obj = object();
        obj.position = Vec3::ZERO;
        obj.scale = Vec3::new(2.0, 1.0, 1.0);
        let u = ObjectUniform::from_object(&obj);
        let normal = Mat4::from_cols_array_2d(&u.normal);

        // Plane x + y = 0 has normal (1, 1, 0); after scaling x by 2 its
        // tangent (1, -1, 0) becomes (2, -1, 0).
        let n = (normal * Vec4::new(1.0, 1.0, 0.0, 0.0)).truncate();
        let tangent = Vec3::new(2.0, -1.0, 0.0);
        assert!(n.dot(tangent).abs() < 1e-5);
    }
}
