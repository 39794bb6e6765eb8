//! RAII wrapper for the hidden device-anchor window

use crate::{Error, Result};
use direct3dlib::{CreateDummyWindow, DestroyDummyWindow, HWND};

/// An invisible window whose handle anchors Direct3D 9 device creation.
///
/// The window is created hidden and stays hidden; its only purpose is to
/// give `CreateDevice` a focus window when no UI exists. The window (and,
/// once the last one is gone, its window-class registration) is released on
/// `Drop`.
///
/// # Example
/// ```no_run
/// use d3d9rs::DummyWindow;
///
/// let window = DummyWindow::new().unwrap();
/// let hwnd = window.hwnd();
/// // hand hwnd to device creation; keep `window` alive as long as the device
/// ```
pub struct DummyWindow {
    hwnd: HWND,
}

impl DummyWindow {
    /// Creates a new hidden window.
    pub fn new() -> Result<Self> {
        let hwnd = unsafe { CreateDummyWindow() };
        if hwnd.is_null() {
            return Err(Error::CreateWindow);
        }
        Ok(DummyWindow { hwnd })
    }

    /// Returns the window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl Drop for DummyWindow {
    fn drop(&mut self) {
        unsafe {
            DestroyDummyWindow(self.hwnd);
        }
    }
}

impl std::fmt::Debug for DummyWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DummyWindow").field("hwnd", &self.hwnd).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(windows)]
    #[test]
    fn test_window_round_trip() {
        let window = DummyWindow::new().unwrap();
        assert!(!window.hwnd().is_null());
        drop(window);

        let again = DummyWindow::new().unwrap();
        assert!(!again.hwnd().is_null());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_window_unavailable_off_windows() {
        assert!(matches!(DummyWindow::new(), Err(Error::CreateWindow)));
    }
}
