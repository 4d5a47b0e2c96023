// icongen - util/constants.rs
//
// Single source of truth for all named constants: application metadata,
// output locations, and the icon document's fixed geometry and palette.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "icongen";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Output location
// =============================================================================

/// Name of the emitted icon file.
pub const ICON_FILE_NAME: &str = "icon.svg";

/// Path components from the executable's directory to the icon asset
/// directory of the application bundle.
pub const OUTPUT_DIR_COMPONENTS: &[&str] = &["..", "src-tauri", "icons"];

// =============================================================================
// Icon geometry
// =============================================================================

/// Logical canvas size (width and height) of the icon document.
pub const CANVAS_SIZE: u32 = 1024;

/// Radius of the gradient-filled background circle.
pub const BG_CIRCLE_RADIUS: u32 = 480;

/// Radius of each node circle in the centre motif.
pub const NODE_RADIUS: u32 = 30;

/// Stroke width of the bracket paths flanking the motif.
pub const BRACKET_STROKE_WIDTH: u32 = 40;

/// Stroke width of the lines connecting the node circles.
pub const CONNECTOR_STROKE_WIDTH: u32 = 8;

// =============================================================================
// Icon palette
// =============================================================================

/// Background gradient, top-left stop.
pub const BG_GRAD_START: &str = "#667eea";

/// Background gradient, bottom-right stop.
pub const BG_GRAD_END: &str = "#764ba2";

/// Foreground (motif) gradient, top-left stop.
pub const ICON_GRAD_START: &str = "#fbbf24";

/// Foreground (motif) gradient, bottom-right stop.
pub const ICON_GRAD_END: &str = "#f59e0b";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when RUST_LOG is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
