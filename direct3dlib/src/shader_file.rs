//! Loading compiled shader blobs from disk.
//!
//! `CreateVertexShader`/`CreatePixelShader` consume the shader function as a
//! stream of little-endian `DWORD` tokens, so the file bytes are repacked
//! into a `Vec<DWORD>` rather than handed over as raw bytes. The repack also
//! guarantees token alignment no matter how the file buffer was allocated.

use crate::ffi::{D3DERR_INVALIDCALL, DWORD, ERROR_GEN_FAILURE, HRESULT, LPCWSTR, hresult_from_win32};
use std::path::PathBuf;

/// Decodes a NUL-terminated UTF-16 path pointer from the caller.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated UTF-16 string.
pub(crate) unsafe fn wide_to_path(ptr: LPCWSTR) -> Option<PathBuf> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0usize;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    if len == 0 {
        return None;
    }
    let wide = std::slice::from_raw_parts(ptr, len);

    #[cfg(windows)]
    {
        use std::os::windows::ffi::OsStringExt;
        Some(PathBuf::from(std::ffi::OsString::from_wide(wide)))
    }
    #[cfg(not(windows))]
    {
        Some(PathBuf::from(String::from_utf16_lossy(wide)))
    }
}

/// Reads a compiled shader function from `filename`.
///
/// Failures are already expressed as the HRESULT the export returns: I/O
/// errors map through `HRESULT_FROM_WIN32`, a null/empty path or a blob that
/// is not a whole number of tokens is `D3DERR_INVALIDCALL`.
///
/// # Safety
/// `filename` must be null or point to a NUL-terminated UTF-16 string.
pub(crate) unsafe fn read_shader_function(filename: LPCWSTR) -> Result<Vec<DWORD>, HRESULT> {
    let path = wide_to_path(filename).ok_or(D3DERR_INVALIDCALL)?;
    let bytes = std::fs::read(&path).map_err(io_error_to_hresult)?;
    if bytes.is_empty() || bytes.len() % 4 != 0 {
        return Err(D3DERR_INVALIDCALL);
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| DWORD::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

fn io_error_to_hresult(err: std::io::Error) -> HRESULT {
    let code = err.raw_os_error().unwrap_or(ERROR_GEN_FAILURE as i32);
    hresult_from_win32(code as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(Some(0)).collect()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("direct3dlib_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_wide_round_trip() {
        let wide = wide("shaders/VS_DiffuseOpaque.o");
        let path = unsafe { wide_to_path(wide.as_ptr()) }.unwrap();
        assert_eq!(path, PathBuf::from("shaders/VS_DiffuseOpaque.o"));
    }

    #[test]
    fn test_null_and_empty_paths() {
        assert!(unsafe { wide_to_path(std::ptr::null()) }.is_none());
        let empty = [0u16];
        assert!(unsafe { wide_to_path(empty.as_ptr()) }.is_none());
    }

    #[test]
    fn test_missing_file_maps_to_win32_hresult() {
        let wide = wide("direct3dlib_no_such_file.vso");
        let err = unsafe { read_shader_function(wide.as_ptr()) }.unwrap_err();
        assert_eq!(err as u32, 0x8007_0002);
    }

    #[test]
    fn test_misaligned_blob_is_invalid() {
        let path = temp_path("misaligned.vso");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0x00, 0x03, 0xFE]).unwrap();
        drop(file);

        let wide = wide(path.to_str().unwrap());
        let err = unsafe { read_shader_function(wide.as_ptr()) }.unwrap_err();
        assert_eq!(err, D3DERR_INVALIDCALL);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_blob_is_invalid() {
        let path = temp_path("empty.vso");
        std::fs::File::create(&path).unwrap();

        let wide = wide(path.to_str().unwrap());
        let err = unsafe { read_shader_function(wide.as_ptr()) }.unwrap_err();
        assert_eq!(err, D3DERR_INVALIDCALL);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_tokens_decoded_little_endian() {
        let path = temp_path("tokens.vso");
        std::fs::write(&path, [0x00, 0x03, 0xFE, 0xFF, 0xFF, 0xFF, 0x00, 0x00]).unwrap();

        let wide = wide(path.to_str().unwrap());
        let tokens = unsafe { read_shader_function(wide.as_ptr()) }.unwrap();
        assert_eq!(tokens, vec![0xFFFE_0300, 0x0000_FFFF]);

        std::fs::remove_file(&path).unwrap();
    }
}
