//! Export pipeline: rasterize the visible side of a card to PNG.
//!
//! ## Flow
//!
//! 1. [`ExportGate::try_begin`] claims the single export slot; a second
//!    request while one is running is refused with [`CardError::ExportBusy`].
//! 2. Wait [`SETTLE_DELAY`] so pending edits reach the state.
//! 3. Render the side and rasterize it at [`EXPORT_SCALE`] on a blocking
//!    thread.
//! 4. Write `{student name or "id"}_{side}.png` through a temporary file, so a
//!    failed export never leaves a partial image behind.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use resvg::{tiny_skia, usvg};

use crate::error::{CardError, CardResult};
use crate::render::{render_card, CardSvg, Side};
use crate::state::CardState;

/// Linear scale applied to the on-screen card size for print-quality output.
pub const EXPORT_SCALE: f32 = 3.0;

/// Pause before capture so in-flight edits settle.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Installed families tried, in order, for each generic font family.
const SANS_FAMILIES: &[&str] = &[
    "Helvetica",
    "Arial",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
];
const SERIF_FAMILIES: &[&str] = &[
    "Georgia",
    "Times New Roman",
    "Liberation Serif",
    "DejaVu Serif",
    "Noto Serif",
    "FreeSerif",
];
const MONO_FAMILIES: &[&str] = &[
    "Courier New",
    "Liberation Mono",
    "DejaVu Sans Mono",
    "Noto Sans Mono",
    "FreeMono",
];

/// File name for an exported side: `{name}_{side}.png`, `id` when unnamed.
///
/// Path separators and characters rejected by common file systems become
/// `_`, so the file always lands directly in the export directory.
pub fn export_file_name(student_name: &str, side: Side) -> String {
    let name = if student_name.is_empty() {
        "id".to_string()
    } else {
        sanitize_file_stem(student_name)
    };
    format!("{}_{}.png", name, side)
}

fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// First of `candidates` with an installed face, matched case-insensitively.
fn first_installed(db: &usvg::fontdb::Database, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|name| {
            db.faces()
                .any(|face| face.families.iter().any(|(family, _)| family.eq_ignore_ascii_case(name)))
        })
        .map(|name| name.to_string())
}

/// Point the generic families at installed faces. usvg defaults them to
/// Arial, Times New Roman and Courier New, and drops text it cannot shape.
fn map_generic_families(db: &mut usvg::fontdb::Database) {
    let any_family = db
        .faces()
        .find_map(|face| face.families.first().map(|(family, _)| family.clone()));
    let Some(any_family) = any_family else {
        tracing::warn!("No system fonts found, exported cards will have no text");
        return;
    };

    let sans = first_installed(db, SANS_FAMILIES).unwrap_or_else(|| any_family.clone());
    let serif = first_installed(db, SERIF_FAMILIES).unwrap_or_else(|| sans.clone());
    let mono = first_installed(db, MONO_FAMILIES).unwrap_or_else(|| sans.clone());
    tracing::debug!(%sans, %serif, %mono, "Generic font families for export");

    db.set_sans_serif_family(sans);
    db.set_serif_family(serif);
    db.set_monospace_family(mono);
}

/// SVG to PNG converter with a font database loaded once.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    /// Build a rasterizer using the system fonts.
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        let fontdb = options.fontdb_mut();
        fontdb.load_system_fonts();
        map_generic_families(fontdb);
        tracing::debug!(faces = fontdb.len(), "Loaded system fonts for export");
        Self { options }
    }

    /// Process-wide rasterizer; font loading is slow, so it happens once.
    pub fn shared() -> &'static Rasterizer {
        static SHARED: OnceLock<Rasterizer> = OnceLock::new();
        SHARED.get_or_init(Rasterizer::new)
    }

    /// Rasterize `svg` at `scale` and encode it as PNG.
    pub fn rasterize(&self, svg: &CardSvg, scale: f32) -> CardResult<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg.as_str(), &self.options)?;
        let width = (svg.width() as f32 * scale).round() as u32;
        let height = (svg.height() as f32 * scale).round() as u32;
        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(CardError::Canvas { width, height })?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| CardError::Encode(e.to_string()))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-flight guard: at most one export runs at a time.
#[derive(Debug, Clone, Default)]
pub struct ExportGate {
    busy: Arc<AtomicBool>,
}

/// Proof of holding the export slot. Dropping it frees the slot.
#[derive(Debug)]
pub struct ExportTicket {
    busy: Arc<AtomicBool>,
}

impl ExportGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, or `None` if an export is already running.
    pub fn try_begin(&self) -> Option<ExportTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExportTicket {
                busy: self.busy.clone(),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Render `side` of `state` and return PNG bytes at [`EXPORT_SCALE`].
pub fn export_png(rasterizer: &Rasterizer, state: &CardState, side: Side) -> CardResult<Vec<u8>> {
    let svg = render_card(state, side);
    rasterizer.rasterize(&svg, EXPORT_SCALE)
}

/// Write `bytes` to `path` via a sibling temporary file.
pub async fn write_atomically(path: &Path, bytes: &[u8]) -> CardResult<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    if let Err(e) = tokio::fs::write(&partial, bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}

/// Full export of one side into `dir`. Returns the written file.
///
/// The state is captured after the settle delay by the caller-supplied
/// `snapshot`, so the last keystrokes before the click are included.
pub async fn export_side<F>(
    gate: &ExportGate,
    rasterizer: &'static Rasterizer,
    snapshot: F,
    side: Side,
    dir: &Path,
) -> CardResult<PathBuf>
where
    F: FnOnce() -> CardState,
{
    let _ticket = gate.try_begin().ok_or(CardError::ExportBusy)?;

    tokio::time::sleep(SETTLE_DELAY).await;
    let state = snapshot();
    let path = dir.join(export_file_name(&state.student_name, side));

    tracing::info!(side = %side, path = %path.display(), "Exporting card");
    let png = tokio::task::spawn_blocking(move || export_png(rasterizer, &state, side)).await??;

    tokio::fs::create_dir_all(dir).await?;
    write_atomically(&path, &png).await?;
    tracing::info!(bytes = png.len(), "Export written to {}", path.display());
    Ok(path)
}
