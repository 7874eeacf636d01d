use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropcircle_core::editor::AvatarEditor;
use cropcircle_core::geometry::Vec2;
use cropcircle_core::intake::ImageFile;
use cropcircle_core::render::encode_png;
use cropcircle_core::session::EditSession;
use cropcircle_core::viewport::{PanResponse, PointerEvent};

use super::load_config;
use crate::sink::FileStore;
use crate::summary::print_session_summary;

#[derive(Args)]
pub struct CropArgs {
    /// Input image (JPEG or PNG)
    pub file: PathBuf,

    /// Editor config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Zoom slider position: 0 = whole image, 50 = fill viewport, 100 = 2x fill
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub slider: u8,

    /// Centre the image in the viewport before panning
    #[arg(long)]
    pub center: bool,

    /// Pan offset in viewport pixels: "x,y" (e.g. "-20,15")
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Drag gesture in viewport pixels: "x0,y0:x1,y1". May be repeated.
    #[arg(long, allow_hyphen_values = true)]
    pub drag: Vec<String>,

    /// Output JPEG path
    #[arg(short, long, default_value = "avatar.jpg")]
    pub output: PathBuf,

    /// Also write the viewport preview as PNG
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Store the avatar under a content directory instead of --output
    #[arg(long, requires_all = ["user_type", "user_id"])]
    pub store_dir: Option<PathBuf>,

    /// Owner kind used in the storage key (e.g. "parent", "child")
    #[arg(long)]
    pub user_type: Option<String>,

    /// Owner id used in the storage key
    #[arg(long)]
    pub user_id: Option<String>,

    /// Previously stored avatar to delete after storing the new one
    #[arg(long, requires = "store_dir")]
    pub replace: Option<PathBuf>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut editor = AvatarEditor::new(config)?;

    let file = ImageFile::from_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    editor
        .load(file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let session = editor
        .session_mut()
        .context("Editor has no session after load")?;
    apply_view(session, args)?;
    print_session_summary(&args.file, session);

    if let Some(ref path) = args.preview {
        let preview = encode_png(&session.render_preview()?)?;
        std::fs::write(path, preview)
            .with_context(|| format!("Failed to write preview to {}", path.display()))?;
        println!("Preview saved to {}", path.display());
    }

    let pending = editor.begin_export()?;
    let bytes = editor.complete_export(pending)?;

    if let Some(ref dir) = args.store_dir {
        let store = FileStore::new(dir.clone());
        let user_type = args.user_type.as_deref().context("--user-type is required")?;
        let user_id = args.user_id.as_deref().context("--user-id is required")?;
        let stored = store.put_avatar(user_type, user_id, &bytes)?;
        println!("Stored {} bytes at {}", bytes.len(), stored.display());

        if let Some(ref old) = args.replace {
            store.remove(old)?;
            println!("Removed previous avatar {}", old.display());
        }
    } else {
        std::fs::write(&args.output, &bytes)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        println!("Saved to {}", args.output.display());
    }

    Ok(())
}

fn apply_view(session: &mut EditSession, args: &CropArgs) -> Result<()> {
    session.set_slider(args.slider);

    if args.center {
        session.center_image();
    }
    if let Some(ref offset) = args.offset {
        session.set_offset(parse_point(offset).context("Invalid --offset (expected 'x,y')")?);
    }
    for gesture in &args.drag {
        let (from, to) = parse_drag(gesture)
            .with_context(|| format!("Invalid --drag '{gesture}' (expected 'x0,y0:x1,y1')"))?;
        replay_drag(session, from, to)?;
    }

    Ok(())
}

/// Feed a press-move-release sequence through the pan controller.
fn replay_drag(session: &mut EditSession, from: Vec2, to: Vec2) -> Result<()> {
    if session.handle_pointer(PointerEvent::Down(from)) != PanResponse::CaptureStarted {
        anyhow::bail!(
            "Drag start {},{} is outside the {}px viewport",
            from.x,
            from.y,
            session.spec().viewport_size
        );
    }
    session.handle_pointer(PointerEvent::Move(to));
    session.handle_pointer(PointerEvent::Up(to));
    Ok(())
}

fn parse_point(s: &str) -> Result<Vec2> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()?;
    if parts.len() != 2 {
        anyhow::bail!("Expected exactly 2 values, got {}", parts.len());
    }
    Ok(Vec2::new(parts[0], parts[1]))
}

fn parse_drag(s: &str) -> Result<(Vec2, Vec2)> {
    let (from, to) = s
        .split_once(':')
        .context("Missing ':' between start and end points")?;
    Ok((parse_point(from)?, parse_point(to)?))
}
