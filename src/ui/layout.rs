//! Terminal size breakpoints.

pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Short terminal (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Terminal dimensions plus the sizing decisions derived from them.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// `percentage` of the width, clamped to `min..=max` and the screen.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        let width = ((self.width as u32 * percentage as u32) / 100) as u16;
        width.clamp(min, max).min(self.width)
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Short labels and a one-line footer.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.height < breakpoints::SM_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(50, 30, 60), 60);
        let ctx = LayoutContext::new(40, 20);
        assert_eq!(ctx.bounded_width(50, 30, 60), 30);
        let ctx = LayoutContext::new(20, 20);
        assert_eq!(ctx.bounded_width(50, 30, 60), 20);
    }

    #[test]
    fn test_breakpoints() {
        assert!(LayoutContext::new(50, 30).is_extra_small());
        assert!(LayoutContext::new(70, 30).is_compact());
        assert!(LayoutContext::new(120, 20).is_compact());
        assert!(!LayoutContext::new(120, 40).is_compact());
    }
}
