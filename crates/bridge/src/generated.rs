//! Generated gRPC bindings for the `gymbot` proto package.

tonic::include_proto!("gymbot");
