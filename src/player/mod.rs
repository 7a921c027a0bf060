//! Alarm sound playback
//!
//! With the `audio` feature the sound file is decoded and played through
//! rodio on the default output device. Without it the terminal bell is
//! rung instead.

use std::io::Write;
use std::path::Path;

use crate::error::{ChimeError, Result};

/// Something that can make an alarm audible
pub trait Player {
    /// Play `sound` once, blocking until playback finishes
    fn play(&self, sound: &Path) -> Result<()>;
}

/// Rings the terminal bell on stdout
#[derive(Debug, Default)]
pub struct BellPlayer;

impl Player for BellPlayer {
    fn play(&self, sound: &Path) -> Result<()> {
        tracing::debug!(sound = %sound.display(), "audio disabled, ringing terminal bell");
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| ChimeError::Playback(format!("cannot ring terminal bell: {}", e)))
    }
}

#[cfg(feature = "audio")]
pub use rodio_player::RodioPlayer;

#[cfg(feature = "audio")]
mod rodio_player {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use rodio::{Decoder, OutputStreamBuilder, Sink};

    use super::Player;
    use crate::error::{ChimeError, Result};

    /// Plays sound files on the default audio output
    #[derive(Debug, Default)]
    pub struct RodioPlayer;

    impl Player for RodioPlayer {
        fn play(&self, sound: &Path) -> Result<()> {
            let file = File::open(sound).map_err(|e| {
                ChimeError::Playback(format!("cannot open sound '{}': {}", sound.display(), e))
            })?;
            let source = Decoder::new(BufReader::new(file)).map_err(|e| {
                ChimeError::Playback(format!("cannot decode '{}': {}", sound.display(), e))
            })?;

            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| ChimeError::Playback(format!("no audio output: {}", e)))?;
            stream.log_on_drop(false);

            let sink = Sink::connect_new(stream.mixer());
            sink.append(source);
            sink.sleep_until_end();
            Ok(())
        }
    }
}

/// The best player this build supports
pub fn default_player() -> Box<dyn Player> {
    #[cfg(feature = "audio")]
    {
        Box::new(RodioPlayer)
    }
    #[cfg(not(feature = "audio"))]
    {
        Box::new(BellPlayer)
    }
}
