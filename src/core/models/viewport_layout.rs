use iced::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLayout {
    viewport: Size,
    header_height: f32,
}

impl ViewportLayout {
    pub fn build(viewport: Size, header_height: f32) -> Self {
        log::debug!(
            "[LAYOUT] Initial viewport {}x{}, header {}px",
            viewport.width,
            viewport.height,
            header_height
        );
        Self {
            viewport,
            header_height,
        }
    }

    pub fn resize(&mut self, viewport: Size, header_height: f32) {
        self.viewport = viewport;
        self.header_height = header_height;
        log::debug!(
            "[LAYOUT] Viewport resized to {}x{}, grid height {}px",
            viewport.width,
            viewport.height,
            self.grid_height()
        );
    }

    #[allow(dead_code)]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn grid_width(&self) -> f32 {
        self.viewport.width
    }

    pub fn grid_height(&self) -> f32 {
        (self.viewport.height - self.header_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_height_is_viewport_minus_header() {
        let layout = ViewportLayout::build(Size::new(800.0, 600.0), 136.0);

        assert_eq!(layout.grid_height(), 464.0);
        assert_eq!(layout.grid_width(), 800.0);
    }

    #[test]
    fn test_resize_recomputes_grid_height() {
        let mut layout = ViewportLayout::build(Size::new(800.0, 600.0), 136.0);

        layout.resize(Size::new(1280.0, 1000.0), 136.0);

        assert_eq!(layout.grid_height(), 864.0);
        assert_eq!(layout.viewport(), Size::new(1280.0, 1000.0));
    }

    #[test]
    fn test_grid_height_never_goes_negative() {
        let layout = ViewportLayout::build(Size::new(800.0, 100.0), 136.0);
        assert_eq!(layout.grid_height(), 0.0);
    }
}
