pub const DEFAULT_WIDTH: i32 = 1280;          // Render width when no --width is given
pub const DEFAULT_HEIGHT: i32 = 720;          // Render height when no --height is given
pub const DEFAULT_FPS: u32 = 60;              // Frames per second
pub const DEFAULT_TRANSITION: f32 = 0.5;      // Seconds a slide takes to glide to its new offset

pub const SLIDE_FILL: f32 = 0.9;              // Share of the viewport an image may cover

pub const CONTROL_RADIUS: f32 = 28.0;         // Left/right control button radius (pixels)
pub const CONTROL_MARGIN: f32 = 48.0;         // Distance from the viewport edge to a control centre

pub const DOT_RADIUS: f32 = 8.0;              // Indicator dot radius (pixels)
pub const DOT_SPACING: f32 = 28.0;            // Distance between two dot centres
pub const DOT_BOTTOM_MARGIN: f32 = 36.0;      // Distance from the bottom edge to the dot row
