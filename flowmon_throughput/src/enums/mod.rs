pub mod tcp_variant;
