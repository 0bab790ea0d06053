use crate::sphere::Face;

/// Errors raised while setting up the GPU.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),
}

impl From<wgpu::CreateSurfaceError> for RendererError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<RendererError> for glex_common::GlexError {
    fn from(e: RendererError) -> Self {
        glex_common::GlexError::Renderer(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// One vertex of an uploaded display list.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ListVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl ListVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ListVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// Flatten faces into a triangle list. Each vertex's normal is its unit
/// position, which is exact for sphere tessellations.
pub fn list_vertices(faces: &[Face]) -> Vec<ListVertex> {
    faces
        .iter()
        .flat_map(|face| face.vertices())
        .map(|v| {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            let normal = if len > 0.0 {
                [v[0] / len, v[1] / len, v[2] / len]
            } else {
                [0.0, 0.0, 1.0]
            };
            ListVertex {
                position: [v[0] as f32, v[1] as f32, v[2] as f32],
                normal: [normal[0] as f32, normal[1] as f32, normal[2] as f32],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_display() {
        assert_eq!(
            RendererError::AdapterNotFound.to_string(),
            "no suitable GPU adapter found"
        );
        assert_eq!(
            RendererError::SurfaceError("timeout".into()).to_string(),
            "surface error: timeout"
        );
        assert_eq!(
            RendererError::DeviceError("lost".into()).to_string(),
            "device error: lost"
        );
    }

    #[test]
    fn renderer_error_into_glex_error() {
        let err: glex_common::GlexError = RendererError::AdapterNotFound.into();
        assert!(matches!(err, glex_common::GlexError::Renderer(_)));
    }

    #[test]
    fn list_vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<ListVertex>(), 24);
        assert_eq!(std::mem::align_of::<ListVertex>(), 4);
    }

    #[test]
    fn vertices_keep_face_order_and_normalize() {
        let faces = [Face::new([2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0])];
        let vertices = list_vertices(&faces);
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].position, [2.0, 0.0, 0.0]);
        assert_eq!(vertices[0].normal, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[2].normal, [0.0, 0.0, 1.0]);
    }
}
