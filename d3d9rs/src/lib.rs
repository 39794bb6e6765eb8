//! Safe, ergonomic Rust API for the Direct3DLib helper library
//!
//! This crate wraps the raw `direct3dlib` exports in Rust idioms: Result
//! types, RAII handles for shaders and the hidden device-anchor window, and
//! lightweight inspection of compiled D3D9 shader blobs.
//!
//! # Example
//!
//! ```no_run
//! use d3d9rs::{Device, DummyWindow};
//!
//! // The hidden window gives device creation a focus window without UI.
//! let window = DummyWindow::new().unwrap();
//! # let device_ptr = std::ptr::null_mut();
//!
//! // The device pointer comes from whatever interop layer created it.
//! let device = unsafe { Device::from_raw(device_ptr) }.unwrap();
//!
//! let diffuse = device.load_vertex_shader("Shaders/Compiled/VS_DiffuseOpaque.o").unwrap();
//! let lit = device.load_pixel_shader("Shaders/Compiled/PS_Lit.o").unwrap();
//!
//! device.set_vertex_shader(Some(&diffuse)).unwrap();
//! device.set_pixel_shader(Some(&lit)).unwrap();
//! ```

mod bytecode;
mod device;
mod error;
mod shader;
mod window;

pub use bytecode::{ShaderKind, ShaderVersion, parse_version_token, validate};
pub use device::Device;
pub use error::{Error, HResult, Result};
pub use shader::{PixelShader, VertexShader};
pub use window::DummyWindow;
