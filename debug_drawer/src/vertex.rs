/// A debug draw vertex: position + color.
///
/// Used for line-list rendering. Every pair of consecutive vertices
/// forms one line segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DebugVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Line vertices collected for one rendered frame, split by depth testing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderData {
    /// Lines hidden by closer geometry.
    pub depth_tested: Vec<DebugVertex>,
    /// Lines drawn on top of everything.
    pub overlay: Vec<DebugVertex>,
}

impl RenderData {
    /// Total number of vertices in both lists.
    pub fn len(&self) -> usize {
        self.depth_tested.len() + self.overlay.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth_tested.is_empty() && self.overlay.is_empty()
    }

    /// Number of line segments in both lists.
    pub fn line_count(&self) -> usize {
        self.len() / 2
    }

    /// Raw bytes of the depth-tested list, ready for a vertex buffer upload.
    pub fn depth_tested_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.depth_tested)
    }

    pub fn overlay_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<DebugVertex>(), 28);
    }

    #[test]
    fn test_render_data_bytes() {
        let v = DebugVertex {
            position: [1.0, 2.0, 3.0],
            color: [1.0; 4],
        };
        let data = RenderData {
            depth_tested: vec![v, v],
            overlay: Vec::new(),
        };
        assert_eq!(data.line_count(), 1);
        assert_eq!(data.depth_tested_bytes().len(), 56);
        assert!(data.overlay_bytes().is_empty());
    }
}
