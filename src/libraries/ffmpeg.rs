//! FFmpeg, reduced to the audio codecs the engine decodes.

use crate::core::{BuildKind, BuildSpec, PlatformKey};

const CODEC_ARGS: &[&str] = &[
    "--disable-autodetect",
    "--disable-programs",
    "--disable-doc",
    "--disable-everything",
    "--enable-decoder=aac",
    "--enable-decoder=ac3",
    "--enable-decoder=flac",
    "--enable-decoder=mp3",
    "--enable-decoder=vorbis",
    "--enable-encoder=vorbis",
];

// TODO: pick --target-os and assembler support from the host instead of
// hardcoding the MSVC win64 combination.
const MSVC_ARGS: &[&str] = &["--toolchain=msvc", "--target-os=win64", "--disable-x86asm"];

pub fn specs() -> Vec<BuildSpec> {
    vec![
        BuildSpec::new("ffmpeg", "external/FFmpeg")
            .kind(BuildKind::Configure)
            .args(MSVC_ARGS.iter().chain(CODEC_ARGS).copied())
            .only_on([PlatformKey::Windows]),
        BuildSpec::new("ffmpeg", "external/FFmpeg")
            .kind(BuildKind::Configure)
            .args(CODEC_ARGS.iter().copied())
            .only_on([PlatformKey::MacOs, PlatformKey::Linux]),
    ]
}
