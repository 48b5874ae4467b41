//! Generated protobuf bindings for the backend service contracts.
//!
//! One module per proto package; see `proto/*.proto` for the source
//! definitions and `build.rs` for the codegen configuration.

pub mod order {
    tonic::include_proto!("order");
}

pub mod inventory {
    tonic::include_proto!("inventory");
}

pub mod notification {
    tonic::include_proto!("notification");
}
