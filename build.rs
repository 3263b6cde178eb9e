use std::io::Result;

fn main() -> Result<()> {
    // protoc is not available on the system; point prost-build at the
    // vendored binary so `cargo build` is self-contained.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            unsafe {
                std::env::set_var("PROTOC", protoc);
            }
        }
    }
    prost_build::compile_protos(
        &[
            "proto/common.proto",
            "proto/territory.proto",
        ],
        &["proto/"],
    )?;
    Ok(())
}
