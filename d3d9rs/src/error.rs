//! Error types for d3d9rs operations

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// HRESULT status codes from Windows/D3D APIs
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HResult(pub i32);

impl HResult {
    /// Success
    pub const S_OK: HResult = HResult(direct3dlib::S_OK);
    /// Generic failure
    pub const E_FAIL: HResult = HResult(direct3dlib::E_FAIL);
    /// Invalid argument
    pub const E_INVALIDARG: HResult = HResult(direct3dlib::E_INVALIDARG);
    /// Invalid parameter, as reported by the D3D9 runtime
    pub const D3DERR_INVALIDCALL: HResult = HResult(direct3dlib::D3DERR_INVALIDCALL);

    /// Returns true if the result indicates success
    #[inline]
    pub fn is_success(&self) -> bool {
        self.0 >= 0
    }

    /// Returns true if the result indicates an error
    #[inline]
    pub fn is_error(&self) -> bool {
        self.0 < 0
    }

    /// Returns the raw HRESULT value
    #[inline]
    pub fn code(&self) -> i32 {
        self.0
    }
}

impl fmt::Debug for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HResult(0x{:08x})", self.0 as u32)
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0 as u32)
    }
}

impl From<i32> for HResult {
    fn from(hr: i32) -> Self {
        HResult(hr)
    }
}

/// Error type for d3d9rs operations
#[derive(Error, Debug)]
pub enum Error {
    /// Loading a compiled vertex shader failed
    #[error("Loading vertex shader {} failed (HRESULT: {hresult})", path.display())]
    LoadVertexShader {
        /// The HRESULT error code
        hresult: HResult,
        /// The blob file that was being loaded
        path: PathBuf,
    },

    /// Loading a compiled pixel shader failed
    #[error("Loading pixel shader {} failed (HRESULT: {hresult})", path.display())]
    LoadPixelShader {
        /// The HRESULT error code
        hresult: HResult,
        /// The blob file that was being loaded
        path: PathBuf,
    },

    /// Binding a shader to the device failed
    #[error("Binding shader failed (HRESULT: {hresult})")]
    BindShader {
        /// The HRESULT error code
        hresult: HResult,
    },

    /// Dummy window creation failed
    #[error("Dummy window creation failed")]
    CreateWindow,

    /// Shader bytecode is not a valid D3D9 token stream
    #[error("Malformed shader bytecode: {0}")]
    MalformedBytecode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for d3d9rs operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hresult_sign_test() {
        assert!(HResult::S_OK.is_success());
        assert!(HResult(1).is_success());
        assert!(HResult::E_FAIL.is_error());
        assert!(HResult::D3DERR_INVALIDCALL.is_error());
    }

    #[test]
    fn test_hresult_formatting() {
        assert_eq!(format!("{}", HResult::D3DERR_INVALIDCALL), "0x8876086c");
        assert_eq!(format!("{:?}", HResult::E_FAIL), "HResult(0x80004005)");
    }

    #[test]
    fn test_error_display_carries_context() {
        let err = Error::LoadVertexShader {
            hresult: HResult(0x8007_0002u32 as i32),
            path: PathBuf::from("VS_DiffuseOpaque.o"),
        };
        let message = err.to_string();
        assert!(message.contains("VS_DiffuseOpaque.o"));
        assert!(message.contains("0x80070002"));
    }
}
