//! Raw Direct3D 9 / Win32 types used at the export boundary.
//!
//! Everything here is declared by hand from the native headers. The
//! `IDirect3DDevice9` vtable is position-exact: only the four methods this
//! library calls carry full signatures, but every slot is present and in
//! `d3d9.h` order, so the typed entries land on the right vtable offsets.

use std::ffi::c_void;

pub type HRESULT = i32;
pub type UINT = u32;
pub type DWORD = u32;
pub type BOOL = i32;
pub type WORD = u16;
pub type ATOM = u16;
pub type LPCWSTR = *const u16;
pub type WPARAM = usize;
pub type LPARAM = isize;
pub type LRESULT = isize;

pub type HWND = *mut c_void;
pub type HINSTANCE = *mut c_void;
pub type HICON = *mut c_void;
pub type HCURSOR = *mut c_void;
pub type HBRUSH = *mut c_void;
pub type HMENU = *mut c_void;

pub const S_OK: HRESULT = 0;
pub const E_FAIL: HRESULT = 0x80004005u32 as i32;
pub const E_INVALIDARG: HRESULT = 0x80070057u32 as i32;

pub const ERROR_FILE_NOT_FOUND: u32 = 2;
pub const ERROR_GEN_FAILURE: u32 = 31;
pub const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;

pub const WS_OVERLAPPED: DWORD = 0x0000_0000;
pub const CW_USEDEFAULT: i32 = 0x8000_0000u32 as i32;

const FACILITY_WIN32: u32 = 7;
const FACD3D: u32 = 0x876;

/// `HRESULT_FROM_WIN32`: maps a Win32 error code into the HRESULT space.
pub const fn hresult_from_win32(code: u32) -> HRESULT {
    if code == 0 {
        S_OK
    } else {
        (0x8000_0000 | (FACILITY_WIN32 << 16) | (code & 0xFFFF)) as HRESULT
    }
}

/// `MAKE_D3DHRESULT`: failure HRESULT in the Direct3D facility.
pub const fn make_d3dhresult(code: u32) -> HRESULT {
    (0x8000_0000 | (FACD3D << 16) | (code & 0xFFFF)) as HRESULT
}

/// Invalid-parameter code returned by the D3D9 runtime.
pub const D3DERR_INVALIDCALL: HRESULT = make_d3dhresult(2156);

pub type WNDPROC = unsafe extern "system" fn(HWND, UINT, WPARAM, LPARAM) -> LRESULT;

#[repr(C)]
pub struct WNDCLASSEXW {
    pub cbSize: UINT,
    pub style: UINT,
    pub lpfnWndProc: Option<WNDPROC>,
    pub cbClsExtra: i32,
    pub cbWndExtra: i32,
    pub hInstance: HINSTANCE,
    pub hIcon: HICON,
    pub hCursor: HCURSOR,
    pub hbrBackground: HBRUSH,
    pub lpszMenuName: LPCWSTR,
    pub lpszClassName: LPCWSTR,
    pub hIconSm: HICON,
}

#[repr(C)]
pub struct IDirect3DVertexShader9 {
    pub vtable: *const IDirect3DVertexShader9Vtbl,
}

#[repr(C)]
pub struct IDirect3DVertexShader9Vtbl {
    pub QueryInterface: unsafe extern "system" fn(
        *mut IDirect3DVertexShader9,
        *const c_void,
        *mut *mut c_void,
    ) -> HRESULT,
    pub AddRef: unsafe extern "system" fn(*mut IDirect3DVertexShader9) -> u32,
    pub Release: unsafe extern "system" fn(*mut IDirect3DVertexShader9) -> u32,
    pub GetDevice:
        unsafe extern "system" fn(*mut IDirect3DVertexShader9, *mut *mut IDirect3DDevice9) -> HRESULT,
    pub GetFunction:
        unsafe extern "system" fn(*mut IDirect3DVertexShader9, *mut c_void, *mut UINT) -> HRESULT,
}

#[repr(C)]
pub struct IDirect3DPixelShader9 {
    pub vtable: *const IDirect3DPixelShader9Vtbl,
}

#[repr(C)]
pub struct IDirect3DPixelShader9Vtbl {
    pub QueryInterface: unsafe extern "system" fn(
        *mut IDirect3DPixelShader9,
        *const c_void,
        *mut *mut c_void,
    ) -> HRESULT,
    pub AddRef: unsafe extern "system" fn(*mut IDirect3DPixelShader9) -> u32,
    pub Release: unsafe extern "system" fn(*mut IDirect3DPixelShader9) -> u32,
    pub GetDevice:
        unsafe extern "system" fn(*mut IDirect3DPixelShader9, *mut *mut IDirect3DDevice9) -> HRESULT,
    pub GetFunction:
        unsafe extern "system" fn(*mut IDirect3DPixelShader9, *mut c_void, *mut UINT) -> HRESULT,
}

#[repr(C)]
pub struct IDirect3DDevice9 {
    pub vtable: *const IDirect3DDevice9Vtbl,
}

#[repr(C)]
pub struct IDirect3DDevice9Vtbl {
    // IUnknown
    pub QueryInterface: *const c_void,
    pub AddRef: *const c_void,
    pub Release: *const c_void,
    // IDirect3DDevice9
    pub TestCooperativeLevel: *const c_void,
    pub GetAvailableTextureMem: *const c_void,
    pub EvictManagedResources: *const c_void,
    pub GetDirect3D: *const c_void,
    pub GetDeviceCaps: *const c_void,
    pub GetDisplayMode: *const c_void,
    pub GetCreationParameters: *const c_void,
    pub SetCursorProperties: *const c_void,
    pub SetCursorPosition: *const c_void,
    pub ShowCursor: *const c_void,
    pub CreateAdditionalSwapChain: *const c_void,
    pub GetSwapChain: *const c_void,
    pub GetNumberOfSwapChains: *const c_void,
    pub Reset: *const c_void,
    pub Present: *const c_void,
    pub GetBackBuffer: *const c_void,
    pub GetRasterStatus: *const c_void,
    pub SetDialogBoxMode: *const c_void,
    pub SetGammaRamp: *const c_void,
    pub GetGammaRamp: *const c_void,
    pub CreateTexture: *const c_void,
    pub CreateVolumeTexture: *const c_void,
    pub CreateCubeTexture: *const c_void,
    pub CreateVertexBuffer: *const c_void,
    pub CreateIndexBuffer: *const c_void,
    pub CreateRenderTarget: *const c_void,
    pub CreateDepthStencilSurface: *const c_void,
    pub UpdateSurface: *const c_void,
    pub UpdateTexture: *const c_void,
    pub GetRenderTargetData: *const c_void,
    pub GetFrontBufferData: *const c_void,
    pub StretchRect: *const c_void,
    pub ColorFill: *const c_void,
    pub CreateOffscreenPlainSurface: *const c_void,
    pub SetRenderTarget: *const c_void,
    pub GetRenderTarget: *const c_void,
    pub SetDepthStencilSurface: *const c_void,
    pub GetDepthStencilSurface: *const c_void,
    pub BeginScene: *const c_void,
    pub EndScene: *const c_void,
    pub Clear: *const c_void,
    pub SetTransform: *const c_void,
    pub GetTransform: *const c_void,
    pub MultiplyTransform: *const c_void,
    pub SetViewport: *const c_void,
    pub GetViewport: *const c_void,
    pub SetMaterial: *const c_void,
    pub GetMaterial: *const c_void,
    pub SetLight: *const c_void,
    pub GetLight: *const c_void,
    pub LightEnable: *const c_void,
    pub GetLightEnable: *const c_void,
    pub SetClipPlane: *const c_void,
    pub GetClipPlane: *const c_void,
    pub SetRenderState: *const c_void,
    pub GetRenderState: *const c_void,
    pub CreateStateBlock: *const c_void,
    pub BeginStateBlock: *const c_void,
    pub EndStateBlock: *const c_void,
    pub SetClipStatus: *const c_void,
    pub GetClipStatus: *const c_void,
    pub GetTexture: *const c_void,
    pub SetTexture: *const c_void,
    pub GetTextureStageState: *const c_void,
    pub SetTextureStageState: *const c_void,
    pub GetSamplerState: *const c_void,
    pub SetSamplerState: *const c_void,
    pub ValidateDevice: *const c_void,
    pub SetPaletteEntries: *const c_void,
    pub GetPaletteEntries: *const c_void,
    pub SetCurrentTexturePalette: *const c_void,
    pub GetCurrentTexturePalette: *const c_void,
    pub SetScissorRect: *const c_void,
    pub GetScissorRect: *const c_void,
    pub SetSoftwareVertexProcessing: *const c_void,
    pub GetSoftwareVertexProcessing: *const c_void,
    pub SetNPatchMode: *const c_void,
    pub GetNPatchMode: *const c_void,
    pub DrawPrimitive: *const c_void,
    pub DrawIndexedPrimitive: *const c_void,
    pub DrawPrimitiveUP: *const c_void,
    pub DrawIndexedPrimitiveUP: *const c_void,
    pub ProcessVertices: *const c_void,
    pub CreateVertexDeclaration: *const c_void,
    pub SetVertexDeclaration: *const c_void,
    pub GetVertexDeclaration: *const c_void,
    pub SetFVF: *const c_void,
    pub GetFVF: *const c_void,
    pub CreateVertexShader: unsafe extern "system" fn(
        *mut IDirect3DDevice9,
        pFunction: *const DWORD,
        ppShader: *mut *mut IDirect3DVertexShader9,
    ) -> HRESULT,
    pub SetVertexShader:
        unsafe extern "system" fn(*mut IDirect3DDevice9, *mut IDirect3DVertexShader9) -> HRESULT,
    pub GetVertexShader: *const c_void,
    pub SetVertexShaderConstantF: *const c_void,
    pub GetVertexShaderConstantF: *const c_void,
    pub SetVertexShaderConstantI: *const c_void,
    pub GetVertexShaderConstantI: *const c_void,
    pub SetVertexShaderConstantB: *const c_void,
    pub GetVertexShaderConstantB: *const c_void,
    pub SetStreamSource: *const c_void,
    pub GetStreamSource: *const c_void,
    pub SetStreamSourceFreq: *const c_void,
    pub GetStreamSourceFreq: *const c_void,
    pub SetIndices: *const c_void,
    pub GetIndices: *const c_void,
    pub CreatePixelShader: unsafe extern "system" fn(
        *mut IDirect3DDevice9,
        pFunction: *const DWORD,
        ppShader: *mut *mut IDirect3DPixelShader9,
    ) -> HRESULT,
    pub SetPixelShader:
        unsafe extern "system" fn(*mut IDirect3DDevice9, *mut IDirect3DPixelShader9) -> HRESULT,
    pub GetPixelShader: *const c_void,
    pub SetPixelShaderConstantF: *const c_void,
    pub GetPixelShaderConstantF: *const c_void,
    pub SetPixelShaderConstantI: *const c_void,
    pub GetPixelShaderConstantI: *const c_void,
    pub SetPixelShaderConstantB: *const c_void,
    pub GetPixelShaderConstantB: *const c_void,
    pub DrawRectPatch: *const c_void,
    pub DrawTriPatch: *const c_void,
    pub DeletePatch: *const c_void,
    pub CreateQuery: *const c_void,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    const SLOT: usize = size_of::<*const c_void>();

    #[test]
    fn test_device_vtable_slots() {
        // Slot indices from d3d9.h; a drift here would dispatch to an
        // unrelated device method.
        assert_eq!(offset_of!(IDirect3DDevice9Vtbl, CreateVertexShader), 91 * SLOT);
        assert_eq!(offset_of!(IDirect3DDevice9Vtbl, SetVertexShader), 92 * SLOT);
        assert_eq!(offset_of!(IDirect3DDevice9Vtbl, CreatePixelShader), 106 * SLOT);
        assert_eq!(offset_of!(IDirect3DDevice9Vtbl, SetPixelShader), 107 * SLOT);
        assert_eq!(size_of::<IDirect3DDevice9Vtbl>(), 119 * SLOT);
    }

    #[test]
    fn test_hresult_construction() {
        assert_eq!(D3DERR_INVALIDCALL as u32, 0x8876_086C);
        assert_eq!(hresult_from_win32(ERROR_FILE_NOT_FOUND) as u32, 0x8007_0002);
        assert_eq!(hresult_from_win32(0), S_OK);
        assert!(hresult_from_win32(ERROR_GEN_FAILURE) < 0);
    }
}
