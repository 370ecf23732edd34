//! 新規プロジェクトの既定ファイル

use std::collections::BTreeMap;

pub const SKETCH_FILE: &str = "sketch.js";
pub const HTML_FILE: &str = "index.html";
pub const CSS_FILE: &str = "style.css";

const DEFAULT_SKETCH: &str = r#"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
}"#;

const DEFAULT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <script src="https://p5code.jb1.io/p5skia/0.74/canvaskit.js"></script>
    <script src="https://p5code.jb1.io/p5skia/0.74/p5skia.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/p5.js/1.4.0/addons/p5.sound.min.js"></script>
    <link rel="stylesheet" type="text/css" href="style.css">
    <meta charset="utf-8" />
  </head>
  <body>
    <main></main>
    <script src="sketch.js"></script>
  </body>
</html>
"#;

const DEFAULT_CSS: &str = r#"html, body {
  margin: 0;
  padding: 0;
}
canvas {
  display: block;
}
"#;

/// ファイル名 → 既定の本文
pub fn default_files() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        (HTML_FILE, DEFAULT_HTML),
        (CSS_FILE, DEFAULT_CSS),
        (SKETCH_FILE, DEFAULT_SKETCH),
    ])
}
