//! Terminal sound output.

use pomo_core::{Error, Result, SoundId, SoundPlayer};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Launches an external player on `<dir>/<Name>.aiff` without waiting for it
pub struct TerminalPlayer {
    dir: PathBuf,
    program: String,
}

impl TerminalPlayer {
    pub fn new(dir: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            program: program.into(),
        }
    }
}

impl SoundPlayer for TerminalPlayer {
    fn play(&mut self, sound: SoundId) -> Result<()> {
        let path = self.dir.join(format!("{}.aiff", sound.name()));
        if !path.is_file() {
            return Err(Error::SoundUnavailable(sound));
        }

        let mut child = Command::new(&self.program)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Reap in the background so chimes never block the tick loop
        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                tracing::warn!("Sound player did not exit cleanly: {}", e);
            }
        });

        eprintln!("♪ {}", sound);
        Ok(())
    }

    fn beep(&mut self) {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_unavailable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut player = TerminalPlayer::new(temp_dir.path(), "true");

        let result = player.play(SoundId::Ping);
        assert!(matches!(result, Err(Error::SoundUnavailable(SoundId::Ping))));
    }

    #[test]
    fn test_repeated_chimes_spawn_and_reap() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("Ping.aiff"), b"").unwrap();
        let mut player = TerminalPlayer::new(temp_dir.path(), "true");

        for _ in 0..5 {
            player.play(SoundId::Ping).unwrap();
        }
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("Pop.aiff"), b"").unwrap();
        let mut player = TerminalPlayer::new(temp_dir.path(), "pomo-no-such-player");

        assert!(matches!(player.play(SoundId::Pop), Err(Error::Io(_))));
    }
}
