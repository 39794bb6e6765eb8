//! RAII wrappers for shader handles
//!
//! Each wrapper owns one COM reference and releases it on `Drop`. The
//! wrappers deliberately do not implement `Send`/`Sync`: a Direct3D 9 device
//! created without `D3DCREATE_MULTITHREADED` is single-threaded, and its
//! resources go with it.

use std::fmt;

macro_rules! shader_handle {
    ($(#[$doc:meta])* $name:ident, $raw:ident) => {
        $(#[$doc])*
        pub struct $name {
            ptr: *mut direct3dlib::$raw,
        }

        impl $name {
            /// Wraps a raw shader pointer, taking ownership of one reference
            /// (does not AddRef).
            ///
            /// # Safety
            /// The pointer must be a valid shader interface pointer or null.
            pub(crate) unsafe fn from_raw(ptr: *mut direct3dlib::$raw) -> Option<Self> {
                if ptr.is_null() { None } else { Some($name { ptr }) }
            }

            /// Returns the raw interface pointer for FFI use.
            pub fn as_ptr(&self) -> *mut direct3dlib::$raw {
                self.ptr
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                unsafe {
                    ((*(*self.ptr).vtable).Release)(self.ptr);
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).field("ptr", &self.ptr).finish()
            }
        }
    };
}

shader_handle! {
    /// An owned Direct3D 9 vertex shader created from a compiled blob.
    VertexShader, IDirect3DVertexShader9
}

shader_handle! {
    /// An owned Direct3D 9 pixel shader created from a compiled blob.
    PixelShader, IDirect3DPixelShader9
}
