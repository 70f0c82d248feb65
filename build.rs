fn main() {
    // Only the desktop shell needs Tauri's build step.
    #[cfg(feature = "desktop")]
    {
        // The rendering surface ships separately. If its assets are missing,
        // write a placeholder so `frontendDist` resolves at build time.
        let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let dist_dir = manifest_dir.join("dist");
        let index_html = dist_dir.join("index.html");
        if !index_html.exists() {
            let _ = std::fs::create_dir_all(&dist_dir);
            let placeholder = r#"<!doctype html>
<meta charset="utf-8" />
<title>Sortviz</title>
<body>Sortviz frontend assets are not bundled in this build.</body>
"#;
            if let Err(err) = std::fs::write(&index_html, placeholder) {
                println!(
                    "cargo:warning=failed to write placeholder frontendDist index.html ({:?}): {err}",
                    index_html
                );
            }
        }

        tauri_build::build();
    }
}
