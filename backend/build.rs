use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8"><title>Furniture Price Predictor</title></head>
  <body>
    <p>The frontend bundle was not built. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the backend.</p>
  </body>
</html>
"#;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).unwrap();

    if dist_dir.exists() {
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else {
        // include_dir! needs the directory to exist
        let placeholder_dir = out_dir.join("dist");
        fs::create_dir_all(&placeholder_dir).unwrap();
        fs::write(placeholder_dir.join("index.html"), PLACEHOLDER_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
