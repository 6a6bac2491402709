fn main() {
    // Force rebuild when the bundled page changes
    println!("cargo:rerun-if-changed=ui/index.html");

    tauri_build::build();
}
