//! Final path assembly
//!
//! Joins the base path, the automatic folder segments and the resolved
//! template into one normalized path string. Assembly is pure; the only
//! file-system work (creating directories) lives in the render hooks.

use std::path::{Path, PathBuf};

use rendernames_domain::{FolderOptions, RenderContext, SanitizationPolicy};

use crate::sanitizer::{escape_separators, sanitize_segment};

/// Marker the host uses for "relative to the project file".
pub const RELATIVE_PREFIX: &str = "//";

/// Leading `\\` of a Windows network share path.
pub const UNC_PREFIX: &str = r"\\";

/// Base path used when neither a custom base nor a host output directory
/// is available.
pub const DEFAULT_BASE_PATH: &str = "//renders/";

/// Builds final output paths for one context snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PathAssembler<'a> {
    context: &'a RenderContext,
    policy: SanitizationPolicy,
}

impl<'a> PathAssembler<'a> {
    /// Creates an assembler for the given snapshot and policy.
    #[must_use]
    pub const fn new(context: &'a RenderContext, policy: SanitizationPolicy) -> Self {
        Self { context, policy }
    }

    /// Assembles `base / blend file / date / scene / camera / resolved`.
    ///
    /// Folder segments are only inserted for enabled toggles, always in that
    /// order. The result has no duplicate separators and no trailing
    /// separator; a leading `//` or `/` on the base is kept.
    #[must_use]
    pub fn assemble(&self, resolved: &str, folders: &FolderOptions, base_path: &str) -> String {
        let mut segments = Vec::new();

        if folders.use_blend_root {
            self.push_folder(&mut segments, &self.context.blend_file_name);
        }
        if folders.per_date {
            self.push_folder(&mut segments, &self.context.date());
        }
        if folders.per_scene {
            self.push_folder(&mut segments, &self.context.scene_name);
        }
        if folders.per_camera {
            self.push_folder(&mut segments, self.context.camera_or_fallback());
        }

        segments.push(resolved.to_string());
        let remainder = segments.join("/");

        let (prefix, base_body) = split_prefix(base_path);
        join_normalized(prefix, &format!("{base_body}/{remainder}"))
    }

    fn push_folder(&self, segments: &mut Vec<String>, value: &str) {
        let mut segment = sanitize_segment(&escape_separators(value), false);
        if self.policy.lowercase {
            segment = segment.to_lowercase();
        }
        if !segment.is_empty() {
            segments.push(segment);
        }
    }
}

/// Normalizes separators: empty and `.` segments are dropped and a leading
/// `//`, `\\` or `/` is preserved.
///
/// The prefix is read before separators are unified, so a network share
/// (`\\server\share`) never turns into the project-relative `//` marker.
/// Share paths keep `\` as their separator; everything else uses `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let (prefix, body) = split_prefix(path);
    join_normalized(prefix, body)
}

fn split_prefix(path: &str) -> (&'static str, &str) {
    if let Some(rest) = path.strip_prefix(UNC_PREFIX) {
        (UNC_PREFIX, rest)
    } else if let Some(rest) = path.strip_prefix(RELATIVE_PREFIX) {
        (RELATIVE_PREFIX, rest)
    } else if let Some(rest) = path.strip_prefix(['/', '\\']) {
        ("/", rest)
    } else {
        ("", path)
    }
}

fn join_normalized(prefix: &str, body: &str) -> String {
    let separator = if prefix == UNC_PREFIX { "\\" } else { "/" };
    let body = body
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join(separator);

    format!("{prefix}{body}")
}

/// Returns the directory part of a host output path, if it has one.
///
/// `/tmp/` and `/tmp/frame_` both give `/tmp`; `//frame` gives `//`.
#[must_use]
pub fn directory_of(path: &str) -> Option<&str> {
    let index = path.rfind(['/', '\\'])?;
    let head = &path[..=index];
    let trimmed = head.trim_end_matches(['/', '\\']);
    let directory = if trimmed.is_empty() { head } else { trimmed };
    (!directory.is_empty()).then_some(directory)
}

/// Converts an assembled path to a file-system path, expanding a leading
/// `//` against the project file's directory (or the working directory when
/// the project is unsaved).
#[must_use]
pub fn to_filesystem_path(path: &str, blend_dir: Option<&Path>) -> PathBuf {
    path.strip_prefix(RELATIVE_PREFIX).map_or_else(
        || PathBuf::from(path),
        |rest| blend_dir.unwrap_or_else(|| Path::new(".")).join(rest),
    )
}

/// Directory that must exist before rendering to `path`: everything but the
/// final file name segment.
#[must_use]
pub fn output_directory(path: &str, blend_dir: Option<&Path>) -> Option<PathBuf> {
    to_filesystem_path(path, blend_dir)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rendernames_domain::FramePadding;

    fn context() -> RenderContext {
        RenderContext {
            scene_name: "Main Scene".into(),
            blend_file_name: "film".into(),
            camera_name: Some("Cam:01".into()),
            captured_at: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            width: 1920,
            height: 1080,
            resolution_percent: 100,
            fps: 24,
            format: "PNG".into(),
            engine: "cycles".into(),
            samples: Some(128),
            frame_start: 1,
            frame_end: 250,
            frame_current: 1,
            frame_padding: FramePadding::default(),
        }
    }

    fn folders(
        use_blend_root: bool,
        per_date: bool,
        per_scene: bool,
        per_camera: bool,
    ) -> FolderOptions {
        FolderOptions {
            use_blend_root,
            per_date,
            per_scene,
            per_camera,
        }
    }

    #[test]
    fn test_folder_option_ordering() {
        let ctx = context();
        let assembler = PathAssembler::new(&ctx, SanitizationPolicy::sanitizing());
        assert_eq!(
            assembler.assemble("0001", &folders(true, true, false, false), "/out"),
            "/out/film/2025-01-15/0001"
        );
    }

    #[test]
    fn test_all_folders_in_fixed_order() {
        let ctx = context();
        let assembler = PathAssembler::new(&ctx, SanitizationPolicy::sanitizing());
        assert_eq!(
            assembler.assemble("shot_", &folders(true, true, true, true), "/out/"),
            "/out/film/2025-01-15/Main_Scene/Cam_01/shot_"
        );
    }

    #[test]
    fn test_folder_segments_follow_lowercase() {
        let ctx = context();
        let policy = SanitizationPolicy::sanitizing().with_lowercase(true);
        let assembler = PathAssembler::new(&ctx, policy);
        assert_eq!(
            assembler.assemble("x", &folders(false, false, true, false), "//renders/"),
            "//renders/main_scene/x"
        );
    }

    #[test]
    fn test_relative_marker_preserved() {
        let ctx = context();
        let assembler = PathAssembler::new(&ctx, SanitizationPolicy::sanitizing());
        assert_eq!(
            assembler.assemble("Scene_0001", &FolderOptions::default(), DEFAULT_BASE_PATH),
            "//renders/Scene_0001"
        );
    }

    #[test]
    fn test_empty_base_gives_relative_path() {
        let ctx = context();
        let assembler = PathAssembler::new(&ctx, SanitizationPolicy::sanitizing());
        assert_eq!(
            assembler.assemble("a//b/", &FolderOptions::default(), ""),
            "a/b"
        );
    }

    #[test]
    fn test_root_base_stays_absolute() {
        let ctx = context();
        let assembler = PathAssembler::new(&ctx, SanitizationPolicy::sanitizing());
        assert_eq!(
            assembler.assemble("Scene_", &FolderOptions::default(), "/"),
            "/Scene_"
        );
        assert_eq!(
            assembler.assemble("Scene_", &folders(true, false, false, false), "/"),
            "/film/Scene_"
        );
        assert_eq!(
            assembler.assemble("Scene_", &FolderOptions::default(), "//"),
            "//Scene_"
        );
    }

    #[test]
    fn test_network_share_base_is_not_project_relative() {
        let ctx = context();
        let assembler = PathAssembler::new(&ctx, SanitizationPolicy::sanitizing());
        let path = assembler.assemble(
            "Scene_",
            &folders(true, false, false, false),
            r"\\server\share",
        );

        assert_eq!(path, r"\\server\share\film\Scene_");
        assert_eq!(
            to_filesystem_path(&path, Some(Path::new("/projects/film"))),
            PathBuf::from(r"\\server\share\film\Scene_")
        );
    }

    #[test]
    fn test_normalize_removes_duplicates_and_trailing() {
        assert_eq!(normalize_path("/out//a/./b/"), "/out/a/b");
        assert_eq!(normalize_path("//renders//x"), "//renders/x");
        assert_eq!(normalize_path(r"C:\renders\shot"), "C:/renders/shot");
        assert_eq!(normalize_path("a/b"), "a/b");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(r"\\server\share\\x\"), r"\\server\share\x");
    }

    #[test]
    fn test_directory_of_host_paths() {
        assert_eq!(directory_of("/tmp/"), Some("/tmp"));
        assert_eq!(directory_of("/tmp/frame_"), Some("/tmp"));
        assert_eq!(directory_of("//frame"), Some("//"));
        assert_eq!(directory_of(r"C:\out\f"), Some(r"C:\out"));
        assert_eq!(directory_of("frame"), None);
    }

    #[test]
    fn test_filesystem_path_expands_relative_marker() {
        let blend_dir = Path::new("/projects/film");
        assert_eq!(
            to_filesystem_path("//renders/x", Some(blend_dir)),
            PathBuf::from("/projects/film/renders/x")
        );
        assert_eq!(
            to_filesystem_path("//renders/x", None),
            PathBuf::from("./renders/x")
        );
        assert_eq!(to_filesystem_path("/out/x", Some(blend_dir)), PathBuf::from("/out/x"));
    }

    #[test]
    fn test_output_directory_excludes_file_name() {
        assert_eq!(
            output_directory("/out/film/2025-01-15/0001", None),
            Some(PathBuf::from("/out/film/2025-01-15"))
        );
        assert_eq!(output_directory("frame_", None), None);
    }
}
