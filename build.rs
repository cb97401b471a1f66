fn main() {
    // Rerun when the resource script or the manifest it embeds changes.
    println!("cargo:rerun-if-changed=app.rc");
    println!("cargo:rerun-if-changed=app.manifest");

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        embed_manifest();
    }
}

// Embeds the Common Controls v6 manifest so the dialog gets the modern look.
#[cfg(target_os = "windows")]
fn embed_manifest() {
    let _ = embed_resource::compile("app.rc", &[] as &[&str]);
}

#[cfg(not(target_os = "windows"))]
fn embed_manifest() {}
