#[cfg(feature = "host-controller")]
pub mod host;
