use std::path::PathBuf;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod constants;
mod engine;
mod error;
mod ffmpeg;
mod slider;
mod texture_loader;

use crate::constants::*;
use crate::engine::Engine;
use crate::ffmpeg::Ffmpeg;
use crate::slider::engine::SliderEngine;
use crate::texture_loader::{load_sorted_image_paths, load_textures, shuffle_paths};

/// Browse a directory of images one slide at a time.
#[derive(Parser, Debug)]
#[command(name = "slider", version)]
struct Args {
    /// Directory holding the slide images
    dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Seconds a slide takes to glide into place, 0 to jump
    #[arg(long, default_value_t = DEFAULT_TRANSITION)]
    transition: f32,

    /// Shuffle the slide order once at startup
    #[arg(long)]
    shuffle: bool,

    /// Record the session to this video file through ffmpeg
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let mut image_paths = load_sorted_image_paths(&args.dir)
        .with_context(|| format!("loading slides from {:?}", args.dir))?;
    if args.shuffle {
        shuffle_paths(&mut image_paths);
    }

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_textures(&mut rl, &thread, &image_paths);
    let mut engine = SliderEngine::new(textures, args.width, args.height, args.transition)
        .context("no slide could be loaded")?;
    info!("{} slides, {}x{} at {} fps", engine.slide_count(), args.width, args.height, args.fps);

    let mut recorder = args
        .record
        .as_deref()
        .map(|output| Ffmpeg::new(args.width, args.height, args.fps, output))
        .transpose()?;

    let mut framebuffer = rl
        .load_render_texture(&thread, args.width as u32, args.height as u32)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    let fixed_dt = 1.0 / args.fps as f32;

    while !rl.window_should_close() {
        // recorded sessions advance at the video's frame rate
        let dt = if recorder.is_some() { fixed_dt } else { rl.get_frame_time() };

        engine.handle_input(&mut rl);
        engine.render_frame(dt, &mut rl, &thread, &mut framebuffer);

        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        // render textures are stored upside down
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d);

        if let Some(recorder) = recorder.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("failed to read back the rendered frame: {}", e))?;
            recorder.write(&image)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_a_directory_is_given() {
        let args = Args::try_parse_from(["slider", "photos"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("photos"));
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.height, DEFAULT_HEIGHT);
        assert_eq!(args.fps, DEFAULT_FPS);
        assert_eq!(args.transition, DEFAULT_TRANSITION);
        assert!(!args.shuffle);
        assert!(args.record.is_none());
    }

    #[test]
    fn options_override_defaults() {
        let args = Args::try_parse_from([
            "slider", "photos", "--width", "800", "--transition", "0", "--shuffle", "--record", "out.mp4",
        ])
        .unwrap();
        assert_eq!(args.width, 800);
        assert_eq!(args.transition, 0.0);
        assert!(args.shuffle);
        assert_eq!(args.record, Some(PathBuf::from("out.mp4")));
    }

    #[test]
    fn directory_is_required() {
        assert!(Args::try_parse_from(["slider"]).is_err());
    }
}
