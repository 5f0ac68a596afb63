/// Configuration for the GPUI diagram view.
#[derive(Debug, Clone)]
pub struct DiagramViewConfig {
    /// Internal canvas width in pixels.
    pub canvas_width: u32,
    /// Internal canvas height in pixels.
    pub canvas_height: u32,
    /// Show the graph coordinate under the cursor.
    pub show_hover: bool,
    /// Show validation messages as an on-canvas banner.
    pub show_alerts: bool,
}

impl Default for DiagramViewConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            show_hover: true,
            show_alerts: true,
        }
    }
}
