//! Render state configurations

/// Clear state for render targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearState {
    /// Color to clear to (RGBA), or None to keep the previous contents.
    pub color: Option<[f32; 4]>,
}

impl ClearState {
    /// Clear to the given color.
    pub fn color(color: [f32; 4]) -> Self {
        Self { color: Some(color) }
    }

    /// Don't clear anything.
    pub fn none() -> Self {
        Self { color: None }
    }

    /// Get the wgpu load operation for color.
    pub fn color_load_op(&self) -> wgpu::LoadOp<wgpu::Color> {
        match self.color {
            Some([r, g, b, a]) => wgpu::LoadOp::Clear(wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            }),
            None => wgpu::LoadOp::Load,
        }
    }
}

impl Default for ClearState {
    fn default() -> Self {
        Self::color([0.0, 0.0, 0.0, 1.0])
    }
}

/// Blend state configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendState {
    /// No blending (opaque).
    #[default]
    Opaque,
    /// Standard alpha blending.
    Alpha,
}

impl BlendState {
    /// Convert to wgpu blend state.
    pub fn to_wgpu(&self) -> Option<wgpu::BlendState> {
        match self {
            BlendState::Opaque => None,
            BlendState::Alpha => Some(wgpu::BlendState::ALPHA_BLENDING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_load_op() {
        let clear = ClearState::color([0.8, 0.8, 0.8, 1.0]);
        match clear.color_load_op() {
            wgpu::LoadOp::Clear(c) => {
                assert!((c.r - 0.8).abs() < 1e-6);
                assert_eq!(c.a, 1.0);
            }
            _ => panic!("expected a clear op"),
        }
    }

    #[test]
    fn test_clear_none_loads() {
        assert!(matches!(
            ClearState::none().color_load_op(),
            wgpu::LoadOp::Load
        ));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BlendState::default().to_wgpu(), None);
        assert!(BlendState::Alpha.to_wgpu().is_some());
    }
}
