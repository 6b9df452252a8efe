use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use log::{error, info};
use raylib::prelude::*;

use crate::error::SliderError;

/// Pipes raw RGBA frames into an ffmpeg child process encoding an mp4.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg, SliderError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(|e| SliderError::Recorder(format!("failed to start ffmpeg: {}", e)))?;
        let stdin = process
            .stdin
            .take()
            .ok_or_else(|| SliderError::Recorder("failed to open ffmpeg stdin".to_string()))?;
        info!("recording to {:?}", output);
        Ok(Ffmpeg { process, stdin: Some(stdin) })
    }

    pub fn write(&mut self, image: &Image) -> Result<(), SliderError> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| SliderError::Recorder("ffmpeg stdin already closed".to_string()))?;

        let width = image.width() as usize;
        let height = image.height() as usize;
        let row_len = width * 4; // RGBA
        // SAFETY: a framebuffer image holds width * height RGBA8 pixels
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };

        // raylib hands the framebuffer over bottom row first
        for row in pixels.chunks_exact(row_len).rev() {
            stdin
                .write_all(row)
                .map_err(|e| SliderError::Recorder(format!("failed to write frame: {}", e)))?;
        }
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // ffmpeg finishes the file once its stdin closes
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => info!("recording finished"),
            Ok(status) => error!("ffmpeg exited with {}", status),
            Err(e) => error!("failed to wait for ffmpeg: {}", e),
        }
    }
}
