use std::fs;
use std::io;
use std::path::Path;

const SITE_PKG_DIR: &str = "target/site/pkg";

fn copy_if_present(source: &Path, dest: &Path) -> io::Result<()> {
    if source.exists() {
        fs::copy(source, dest)?;
        println!("Copied {} to {}", source.display(), dest.display());
    } else {
        println!("Skipping {}: not found", source.display());
    }
    Ok(())
}

/// cargo-leptos emits `portfolio.wasm`; the hydration script asks for
/// `portfolio_bg.wasm`, so link the latter to the former.
fn link_wasm(site_pkg_dir: &Path) -> io::Result<()> {
    let link = site_pkg_dir.join("portfolio_bg.wasm");
    if link.symlink_metadata().is_ok() {
        fs::remove_file(&link)?;
    }

    #[cfg(unix)]
    std::os::unix::fs::symlink("portfolio.wasm", &link)?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_file("portfolio.wasm", &link)?;

    println!("Created WASM symlink portfolio_bg.wasm -> portfolio.wasm");
    Ok(())
}

fn prepare_site() -> io::Result<()> {
    let site_pkg_dir = Path::new(SITE_PKG_DIR);
    fs::create_dir_all(site_pkg_dir)?;

    copy_if_present(Path::new("target/tmp/tailwind.css"), &site_pkg_dir.join("portfolio.css"))?;
    copy_if_present(Path::new("public/favicon.ico"), Path::new("target/site/favicon.ico"))?;
    link_wasm(site_pkg_dir)
}

fn main() {
    println!("cargo:rerun-if-changed=style/tailwind.css");

    // Site preparation is a convenience for local runs; never fail the build over it.
    if let Err(err) = prepare_site() {
        println!("cargo:warning=failed to prepare target/site: {err}");
    }
}
