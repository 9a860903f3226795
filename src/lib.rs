pub mod convert;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
