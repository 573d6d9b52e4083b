//! Frame loop: reset, render, present, advance, wait

use crate::buffer::FrameBuffer;
use crate::config::RenderConfig;
use crate::scene::{GlyphScene, RotationState};
use crate::terminal::TerminalSink;
use crate::torus::SurfaceSampler;
use std::io::Write;
use std::time::Instant;

/// Frames between timing reports
const REPORT_INTERVAL: u64 = 100;

/// Owns the buffers and the rotation for the spinning H
pub struct Animation {
    config: RenderConfig,
    sampler: SurfaceSampler,
    scene: GlyphScene,
    frame: FrameBuffer,
    rotation: RotationState,
}

impl Animation {
    pub fn new(config: RenderConfig) -> crate::Result<Self> {
        config.validate()?;

        Ok(Self {
            sampler: SurfaceSampler::new(&config),
            scene: GlyphScene::letter_h(),
            frame: FrameBuffer::new(config.width, config.height),
            rotation: RotationState::from_config(&config),
            config,
        })
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn sampler(&self) -> &SurfaceSampler {
        &self.sampler
    }

    pub fn scene(&self) -> &GlyphScene {
        &self.scene
    }

    /// Clear both buffers and draw the scene at the current angles
    pub fn render_frame(&mut self) -> usize {
        self.frame.reset();
        self.scene.render(&self.sampler, self.rotation.current(), &mut self.frame)
    }

    /// One frame without the pacing delay
    pub fn step<W: Write>(&mut self, sink: &mut TerminalSink<W>) -> crate::Result<()> {
        let written = self.render_frame();
        sink.present(&self.frame)?;
        tracing::trace!(frame = self.rotation.frames(), written, "Frame presented");
        self.rotation.advance();
        Ok(())
    }

    /// Clear the screen, then run frames while `keep_going(frames_so_far)` holds.
    /// Returns the number of frames drawn.
    pub fn run_until<W, F>(&mut self, sink: &mut TerminalSink<W>, mut keep_going: F) -> crate::Result<u64>
    where
        W: Write,
        F: FnMut(u64) -> bool,
    {
        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            tori = self.scene.placements.len(),
            samples_per_torus = self.sampler.samples_per_torus(),
            "Starting animation"
        );
        sink.begin()?;

        let mut frames = 0;
        let mut window = Instant::now();

        while keep_going(frames) {
            self.step(sink)?;
            frames += 1;

            if frames % REPORT_INTERVAL == 0 {
                let elapsed = window.elapsed();
                tracing::debug!(
                    frames,
                    avg_frame_ms = elapsed.as_secs_f64() * 1000.0 / REPORT_INTERVAL as f64,
                    "Frame timing"
                );
                window = Instant::now();
            }

            if !self.config.frame_delay.is_zero() {
                std::thread::sleep(self.config.frame_delay);
            }
        }

        Ok(frames)
    }

    /// Run until the process is interrupted or the sink fails
    pub fn run_forever<W: Write>(&mut self, sink: &mut TerminalSink<W>) -> crate::Result<()> {
        self.run_until(sink, |_| true).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ROT_SPEED_A, ROT_SPEED_B};
    use crate::torus::Rotation;
    use crate::{Error, BLANK};
    use std::io;
    use std::time::Duration;

    fn fast_config() -> RenderConfig {
        RenderConfig {
            frame_delay: Duration::ZERO,
            theta_step: 0.2,
            phi_step: 0.1,
            ..RenderConfig::default()
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RenderConfig { height: 0, ..fast_config() };
        assert!(matches!(Animation::new(config), Err(Error::Config(ConfigError::Validation(_)))));
    }

    #[test]
    fn test_run_until_counts_frames() {
        let config = fast_config();
        let mut animation = Animation::new(config.clone()).unwrap();
        let mut sink = TerminalSink::new(Vec::new());

        let frames = animation.run_until(&mut sink, |n| n < 3).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(animation.rotation().frames(), 3);

        let out = sink.into_inner();
        let expected = 4 + 3 * (6 + config.height * (config.width + 1));
        assert_eq!(out.len(), expected);
    }

    #[test]
    fn test_run_until_false_only_clears() {
        let mut animation = Animation::new(fast_config()).unwrap();
        let mut sink = TerminalSink::new(Vec::new());
        assert_eq!(animation.run_until(&mut sink, |_| false).unwrap(), 0);
        assert_eq!(sink.into_inner(), b"\x1b[2J".to_vec());
    }

    #[test]
    fn test_frame_n_matches_direct_render() {
        let config = fast_config();
        let mut animation = Animation::new(config.clone()).unwrap();
        let mut sink = TerminalSink::new(Vec::new());
        animation.run_until(&mut sink, |n| n < 6).unwrap();

        let mut direct = FrameBuffer::new(config.width, config.height);
        let rotation = Rotation::new(5.0 * ROT_SPEED_A, 5.0 * ROT_SPEED_B);
        animation.scene().render(animation.sampler(), rotation, &mut direct);
        assert_eq!(animation.frame(), &direct);

        let mut expected = TerminalSink::new(Vec::new());
        expected.present(&direct).unwrap();
        assert!(sink.get_ref().ends_with(expected.get_ref()));
    }

    #[test]
    fn test_render_frame_resets_previous_frame() {
        let mut animation = Animation::new(fast_config()).unwrap();
        animation.render_frame();
        let first = animation.frame().clone();
        animation.render_frame();
        assert_eq!(animation.frame(), &first);
        assert!(animation.frame().chars.cells().iter().any(|&c| c != BLANK));
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut animation = Animation::new(fast_config()).unwrap();
        let mut sink = TerminalSink::new(BrokenPipe);
        match animation.run_until(&mut sink, |n| n < 10) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected io error, got {:?}", other.map(|_| ())),
        }
    }
}
