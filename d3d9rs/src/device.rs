//! Borrowed wrapper around a Direct3D 9 device pointer

use crate::{Error, HResult, PixelShader, Result, VertexShader};
use direct3dlib::{
    IDirect3DDevice9, LoadPixelShaderFromFile, LoadVertexShaderFromFile, S_OK, SetPixelShader,
    SetVertexShader,
};
use std::path::Path;
use std::ptr;

/// A borrowed Direct3D 9 device.
///
/// `Device` does not own a reference: the device pointer comes from whatever
/// created the device (an interop layer, a windowing toolkit), and that owner
/// keeps it alive for as long as the `Device` is used. No AddRef/Release is
/// performed.
pub struct Device {
    ptr: *mut IDirect3DDevice9,
}

impl Device {
    /// Wraps a raw device pointer. Returns `None` on null.
    ///
    /// # Safety
    /// A non-null `ptr` must be a valid `IDirect3DDevice9` pointer that
    /// outlives the returned `Device`.
    pub unsafe fn from_raw(ptr: *mut IDirect3DDevice9) -> Option<Self> {
        if ptr.is_null() { None } else { Some(Device { ptr }) }
    }

    /// Returns the raw device pointer.
    pub fn as_ptr(&self) -> *mut IDirect3DDevice9 {
        self.ptr
    }

    /// Loads a compiled vertex shader blob from `path` and creates the
    /// shader on this device.
    pub fn load_vertex_shader(&self, path: impl AsRef<Path>) -> Result<VertexShader> {
        let path = path.as_ref();
        let wide = path_to_wide(path);
        let mut shader = ptr::null_mut();
        let result = unsafe { LoadVertexShaderFromFile(self.ptr, wide.as_ptr(), &mut shader) };
        if result != S_OK {
            return Err(Error::LoadVertexShader {
                hresult: HResult(result),
                path: path.to_path_buf(),
            });
        }
        unsafe { VertexShader::from_raw(shader) }.ok_or_else(|| Error::LoadVertexShader {
            hresult: HResult(result),
            path: path.to_path_buf(),
        })
    }

    /// Loads a compiled pixel shader blob from `path` and creates the shader
    /// on this device.
    pub fn load_pixel_shader(&self, path: impl AsRef<Path>) -> Result<PixelShader> {
        let path = path.as_ref();
        let wide = path_to_wide(path);
        let mut shader = ptr::null_mut();
        let result = unsafe { LoadPixelShaderFromFile(self.ptr, wide.as_ptr(), &mut shader) };
        if result != S_OK {
            return Err(Error::LoadPixelShader {
                hresult: HResult(result),
                path: path.to_path_buf(),
            });
        }
        unsafe { PixelShader::from_raw(shader) }.ok_or_else(|| Error::LoadPixelShader {
            hresult: HResult(result),
            path: path.to_path_buf(),
        })
    }

    /// Binds `shader` to the vertex stage; `None` unbinds it.
    pub fn set_vertex_shader(&self, shader: Option<&VertexShader>) -> Result<()> {
        let raw = shader.map_or(ptr::null_mut(), VertexShader::as_ptr);
        let result = unsafe { SetVertexShader(self.ptr, raw) };
        if result != S_OK {
            return Err(Error::BindShader {
                hresult: HResult(result),
            });
        }
        Ok(())
    }

    /// Binds `shader` to the pixel stage; `None` unbinds it.
    pub fn set_pixel_shader(&self, shader: Option<&PixelShader>) -> Result<()> {
        let raw = shader.map_or(ptr::null_mut(), PixelShader::as_ptr);
        let result = unsafe { SetPixelShader(self.ptr, raw) };
        if result != S_OK {
            return Err(Error::BindShader {
                hresult: HResult(result),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device").field("ptr", &self.ptr).finish()
    }
}

fn path_to_wide(path: &Path) -> Vec<u16> {
    #[cfg(windows)]
    {
        use std::os::windows::ffi::OsStrExt;
        path.as_os_str().encode_wide().chain(Some(0)).collect()
    }
    #[cfg(not(windows))]
    {
        path.to_string_lossy().encode_utf16().chain(Some(0)).collect()
    }
}
