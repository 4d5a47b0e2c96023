// icongen - core/svg.rs
//
// Pure construction of the icon document. No I/O and no parameters:
// the markup is fully determined by the fixed geometry below and the
// palette in util::constants, which keeps this module testable without
// touching the filesystem.

use crate::util::constants::{
    BG_CIRCLE_RADIUS, BG_GRAD_END, BG_GRAD_START, BRACKET_STROKE_WIDTH, CANVAS_SIZE,
    CONNECTOR_STROKE_WIDTH, ICON_GRAD_END, ICON_GRAD_START, NODE_RADIUS,
};

/// Node circle centres of the centre motif, in the coordinate space of the
/// `translate` group anchored at the canvas centre.
const NODE_CENTRES: [(i32, i32); 4] = [(0, -80), (-60, 0), (60, 0), (0, 80)];

/// Connector segments between the nodes, as (x1, y1, x2, y2).
const CONNECTORS: [(i32, i32, i32, i32); 6] = [
    (0, -50, -42, -21),
    (0, -50, 42, -21),
    (-42, 21, 0, 50),
    (42, 21, 0, 50),
    (-42, -21, -42, 21),
    (42, -21, 42, 21),
];

/// Bracket symbols flanking the motif.
const BRACKET_PATHS: [&str; 2] = [
    "M -200,-200 L -150,-200 L -150,-150 M -200,200 L -150,200 L -150,150",
    "M 200,-200 L 150,-200 L 150,-150 M 200,200 L 150,200 L 150,150",
];

/// Build the complete icon document.
///
/// Infallible and deterministic: every call returns byte-identical markup.
pub fn generate() -> String {
    let centre = CANVAS_SIZE / 2;

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bgGrad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{bg0};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{bg1};stop-opacity:1" />
    </linearGradient>
    <linearGradient id="iconGrad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{fg0};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{fg1};stop-opacity:1" />
    </linearGradient>
  </defs>

  <circle cx="{centre}" cy="{centre}" r="{bg_r}" fill="url(#bgGrad)"/>

  <g transform="translate({centre}, {centre})">
"#,
        size = CANVAS_SIZE,
        bg0 = BG_GRAD_START,
        bg1 = BG_GRAD_END,
        fg0 = ICON_GRAD_START,
        fg1 = ICON_GRAD_END,
        bg_r = BG_CIRCLE_RADIUS,
    );

    for d in BRACKET_PATHS {
        svg.push_str(&format!(
            "    <path d=\"{d}\"\n          stroke=\"url(#iconGrad)\" \
             stroke-width=\"{BRACKET_STROKE_WIDTH}\" fill=\"none\" stroke-linecap=\"round\"/>\n"
        ));
    }
    svg.push('\n');

    for (cx, cy) in NODE_CENTRES {
        svg.push_str(&format!(
            "    <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{NODE_RADIUS}\" fill=\"url(#iconGrad)\"/>\n"
        ));
    }
    svg.push('\n');

    for (x1, y1, x2, y2) in CONNECTORS {
        svg.push_str(&format!(
            "    <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" \
             stroke=\"url(#iconGrad)\" stroke-width=\"{CONNECTOR_STROKE_WIDTH}\"/>\n"
        ));
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}
