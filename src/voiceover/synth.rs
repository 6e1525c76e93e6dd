use std::path::Path;
use std::process::Command;

use crate::config::TtsProvider;
use crate::error::VoiceoverError;

/// Renders text to a wave file.
pub trait Synthesizer {
    fn synthesize(&mut self, text: &str, output: &Path) -> Result<(), VoiceoverError>;
}

/// Runs `<program> <args..> <output> <text>` and waits for it.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn for_provider(provider: TtsProvider) -> Self {
        Self::new(
            provider.program(),
            provider.args().iter().map(|a| a.to_string()).collect(),
        )
    }

    fn describe(&self, text: &str, output: &Path) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(output.display().to_string());
        parts.push(text.to_string());
        parts.join(" ")
    }
}

impl Synthesizer for CommandSynthesizer {
    fn synthesize(&mut self, text: &str, output: &Path) -> Result<(), VoiceoverError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(output)
            .arg(text)
            .status()
            .map_err(|source| VoiceoverError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(VoiceoverError::SynthesisFailed {
                command: self.describe(text, output),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
