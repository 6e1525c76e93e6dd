use super::*;
use crate::device::{CATALOG_FILE, MUSIC_DIR};
use crate::error::VoiceoverError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[derive(Default)]
struct Recorder {
    outputs: Vec<PathBuf>,
}

impl Synthesizer for Recorder {
    fn synthesize(&mut self, _text: &str, output: &Path) -> Result<(), VoiceoverError> {
        fs::write(output, b"RIFF").unwrap();
        self.outputs.push(output.to_path_buf());
        Ok(())
    }
}

struct Broken;

impl Synthesizer for Broken {
    fn synthesize(&mut self, text: &str, _output: &Path) -> Result<(), VoiceoverError> {
        Err(VoiceoverError::SynthesisFailed {
            command: format!("broken {text}"),
            status: "exit status: 1".to_string(),
        })
    }
}

fn device_with_music(files: &[&str]) -> (tempfile::TempDir, Device) {
    let mount = tempdir().unwrap();
    let device = Device::open(mount.path()).unwrap();
    device.prepare().unwrap();
    let music = mount.path().join(MUSIC_DIR);
    for f in files {
        let path = music.join(f);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"not real audio").unwrap();
    }
    (mount, device)
}

#[test]
fn rebuild_writes_catalog_for_scanned_tracks() {
    let (mount, device) = device_with_music(&["b.mp3", "a.mp3", "c.m4a"]);
    fs::write(
        mount.path().join(MUSIC_DIR).join("mix.m3u"),
        "c.m4a\nmissing.mp3\na.mp3\n",
    )
    .unwrap();

    let settings = Settings::default();
    let inventory = library::scan(device.root(), &settings.library).unwrap();
    let summary = rebuild(&device, &inventory, &settings, None).unwrap();

    assert_eq!(summary.tracks, 3);
    assert_eq!(summary.playlists, 2);
    assert_eq!(summary.voiceovers, 0);
    assert_eq!(summary.catalog, mount.path().join(CATALOG_FILE));

    let image = fs::read(&summary.catalog).unwrap();
    assert_eq!(image.len(), summary.bytes);
    assert_eq!(&image[0..4], b"bdhs");
    assert_eq!(u32::from_le_bytes(image[12..16].try_into().unwrap()), 3);
    assert_eq!(u32::from_le_bytes(image[16..20].try_into().unwrap()), 2);
}

#[test]
fn rebuild_is_idempotent() {
    let (_mount, device) = device_with_music(&["x/1.mp3", "x/2.wav", "y/3.m4b"]);
    let settings = Settings::default();

    let inventory = library::scan(device.root(), &settings.library).unwrap();
    let first = rebuild(&device, &inventory, &settings, None).unwrap();
    let first_image = fs::read(&first.catalog).unwrap();

    let inventory = library::scan(device.root(), &settings.library).unwrap();
    let second = rebuild(&device, &inventory, &settings, None).unwrap();
    let second_image = fs::read(&second.catalog).unwrap();

    assert_eq!(first_image, second_image);
}

#[test]
fn rebuild_renders_voiceovers_into_speakable_dirs() {
    let (_mount, device) = device_with_music(&["a.mp3", "b.mp3"]);
    let settings = Settings::default();
    let inventory = library::scan(device.root(), &settings.library).unwrap();

    let mut rec = Recorder::default();
    let summary = rebuild(&device, &inventory, &settings, Some(&mut rec)).unwrap();

    // Two tracks plus the master playlist.
    assert_eq!(summary.voiceovers, 3);
    assert_eq!(rec.outputs.len(), 3);
    // Neither file has tags, so both tracks speak " - Unknown" and share a clip.
    let tracks = fs::read_dir(device.speakable_tracks()).unwrap().count();
    let playlists = fs::read_dir(device.speakable_playlists()).unwrap().count();
    assert_eq!(tracks, 1);
    assert_eq!(playlists, 1);
}

#[test]
fn failed_synthesis_leaves_previous_catalog_untouched() {
    let (_mount, device) = device_with_music(&["a.mp3"]);
    device.write_catalog(b"previous").unwrap();

    let settings = Settings::default();
    let inventory = library::scan(device.root(), &settings.library).unwrap();
    let mut broken = Broken;
    let err = rebuild(&device, &inventory, &settings, Some(&mut broken)).unwrap_err();

    assert!(format!("{err:#}").contains("broken"));
    assert_eq!(fs::read(device.catalog_path()).unwrap(), b"previous");
}

#[test]
fn run_without_tracks_fails_before_writing() {
    let (mount, _device) = device_with_music(&[]);
    let cli = Cli {
        mount_path: mount.path().to_path_buf(),
        voiceover: false,
        tts: None,
        verbose: false,
    };

    let err = run(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("no tracks found"));
    assert!(!mount.path().join(CATALOG_FILE).exists());
}

#[test]
fn run_without_tracks_keeps_existing_voiceovers() {
    let (mount, device) = device_with_music(&[]);
    let clip = device.speakable_tracks().join("0011223344556677.wav");
    fs::write(&clip, b"clip").unwrap();
    let cli = Cli {
        mount_path: mount.path().to_path_buf(),
        voiceover: false,
        tts: None,
        verbose: false,
    };

    assert!(run(&cli).is_err());
    assert_eq!(fs::read(&clip).unwrap(), b"clip");
}
