//! Build script for proto compilation
//!
//! Uses tonic_build to generate the GymService messages plus client and
//! server stubs (the server stub is only exercised by tests).

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let proto_path = std::path::Path::new(&manifest_dir).join("protos/gymbot.proto");
    let includes = std::path::Path::new(&manifest_dir).join("protos");

    println!("cargo:rerun-if-changed={}", proto_path.display());

    tonic_build::configure()
        .compile_protos(
            &[proto_path.to_str().unwrap()],
            &[includes.to_str().unwrap()],
        )
        .expect("Failed to compile proto files");
}
