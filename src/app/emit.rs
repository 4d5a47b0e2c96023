// icongen - app/emit.rs
//
// The I/O side of the generator: ensure the output directory exists,
// write the icon document, and print the manual follow-up steps.
// Content construction itself lives in core::svg and stays pure.

use crate::core::svg;
use crate::util::constants::{ICON_FILE_NAME, OUTPUT_DIR_COMPONENTS};
use crate::util::error::{IconGenError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Resolve the default output directory relative to the running executable:
/// `<exe-dir>/../src-tauri/icons`.
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| IconGenError::Io {
        path: PathBuf::from("<current executable>"),
        operation: "resolving executable path",
        source: e,
    })?;

    let exe_dir = exe.parent().ok_or_else(|| IconGenError::Io {
        path: exe.clone(),
        operation: "resolving executable directory",
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable path has no parent directory",
        ),
    })?;

    let mut dir = exe_dir.to_path_buf();
    for component in OUTPUT_DIR_COMPONENTS {
        dir.push(component);
    }
    Ok(dir)
}

/// Write the icon document to `output_dir/icon.svg` and print the
/// confirmation line plus the fixed next-steps block.
///
/// Creates `output_dir` (and any missing parents) first; a pre-existing
/// directory is not an error, and an existing icon file is truncated and
/// overwritten. Returns the path of the written file.
pub fn run(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| IconGenError::Io {
        path: output_dir.to_path_buf(),
        operation: "creating output directory",
        source: e,
    })?;

    let svg_path = output_dir.join(ICON_FILE_NAME);
    let content = svg::generate();

    // Scoped handle: dropped (and so released) on every exit path,
    // including the early returns on write failure.
    {
        let mut file = fs::File::create(&svg_path).map_err(|e| IconGenError::Io {
            path: svg_path.clone(),
            operation: "creating icon file",
            source: e,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|e| IconGenError::Io {
                path: svg_path.clone(),
                operation: "writing icon file",
                source: e,
            })?;
    }

    tracing::info!(path = %svg_path.display(), bytes = content.len(), "Icon written");

    println!("✓ Generated SVG icon at: {}", svg_path.display());
    println!();
    println!("Next steps:");
    println!("1. Convert SVG to PNG using online tool or ImageMagick:");
    println!("   - Online: https://cloudconvert.com/svg-to-png");
    println!("   - Or install ImageMagick: brew install imagemagick");
    println!("   - Then run: convert -background none -size 1024x1024 icon.svg icon.png");
    println!();
    println!("2. Generate Tauri icons:");
    println!("   npm run tauri icon src-tauri/icons/icon.png");

    Ok(svg_path)
}
