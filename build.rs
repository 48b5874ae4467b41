use std::env;
use std::path::PathBuf;

/// Generates gRPC client and server bindings for the three backend service
/// contracts under `proto/`.
///
/// Generated message types carry serde derives so that backend responses can
/// be marshalled straight back to the JSON wire format without intermediate
/// DTOs. Proto field names are snake_case, which matches the JSON field names
/// clients already expect.
fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("gateway_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config
        .type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]")
        .file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(
            config,
            &[
                "proto/order.proto",
                "proto/inventory.proto",
                "proto/notification.proto",
            ],
            &["proto"],
        )
        .unwrap();
}
