use raylib::prelude::*;

pub trait Engine {
    /// Feeds the frame's input to the engine, in the order it arrived.
    fn handle_input(&mut self, rl: &mut RaylibHandle);
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D);
}
