//! Read-only access to the Windows registry
//!
//! Lookups return `Option` rather than errors: an unreadable key is
//! treated the same as an absent one. Key handles are closed when the
//! guard drops, so no handle outlives the lookup that opened it.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use winapi::shared::minwindef::{DWORD, HKEY};
use winapi::shared::winerror::ERROR_SUCCESS;
use winapi::um::winnt::{KEY_READ, REG_DWORD, REG_EXPAND_SZ, REG_SZ};
use winapi::um::winreg::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, RegCloseKey, RegOpenKeyExW, RegQueryValueExW,
};

use crate::windows::EnvScope;

const CURRENT_VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";
const FILESYSTEM_KEY: &str = r"SYSTEM\CurrentControlSet\Control\FileSystem";
const USER_ENVIRONMENT_KEY: &str = r"Environment";
const MACHINE_ENVIRONMENT_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

/// Open registry key, closed on drop
struct RegKey(HKEY);

impl RegKey {
    fn open(root: HKEY, path: &str) -> Option<Self> {
        let wide = to_wide(path);
        let mut handle = ptr::null_mut();
        let status = unsafe { RegOpenKeyExW(root, wide.as_ptr(), 0, KEY_READ, &mut handle) };
        if status == ERROR_SUCCESS as i32 {
            Some(Self(handle))
        } else {
            tracing::debug!(path, status, "failed to open registry key");
            None
        }
    }

    /// Read a `REG_SZ` or `REG_EXPAND_SZ` value
    fn string_value(&self, name: &str) -> Option<String> {
        let wide = to_wide(name);
        let mut kind: DWORD = 0;
        let mut size: DWORD = 0;

        // First query reports the value type and byte length
        let status = unsafe {
            RegQueryValueExW(
                self.0,
                wide.as_ptr(),
                ptr::null_mut(),
                &mut kind,
                ptr::null_mut(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS as i32 || (kind != REG_SZ && kind != REG_EXPAND_SZ) {
            return None;
        }

        let mut buf = vec![0u16; (size as usize).div_ceil(2)];
        let status = unsafe {
            RegQueryValueExW(
                self.0,
                wide.as_ptr(),
                ptr::null_mut(),
                &mut kind,
                buf.as_mut_ptr().cast(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS as i32 {
            return None;
        }

        buf.truncate(size as usize / 2);
        while buf.last() == Some(&0) {
            buf.pop();
        }
        Some(String::from_utf16_lossy(&buf))
    }

    /// Read a `REG_DWORD` value
    fn dword_value(&self, name: &str) -> Option<u32> {
        let wide = to_wide(name);
        let mut kind: DWORD = 0;
        let mut data: DWORD = 0;
        let mut size = size_of::<DWORD>() as DWORD;

        let status = unsafe {
            RegQueryValueExW(
                self.0,
                wide.as_ptr(),
                ptr::null_mut(),
                &mut kind,
                (&mut data as *mut DWORD).cast(),
                &mut size,
            )
        };
        if status == ERROR_SUCCESS as i32 && kind == REG_DWORD {
            Some(data)
        } else {
            None
        }
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        unsafe { RegCloseKey(self.0) };
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
}

/// Product name and build, rendered like "Windows 10 Pro (Build 19045)"
pub(crate) fn product_version() -> Option<String> {
    let key = RegKey::open(HKEY_LOCAL_MACHINE, CURRENT_VERSION_KEY)?;
    let product = key.string_value("ProductName")?;
    let build = key.string_value("CurrentBuild")?;
    Some(format!("{} (Build {})", product, build))
}

/// Whether the filesystem long-path flag is set to exactly 1
pub(crate) fn long_paths_enabled() -> bool {
    RegKey::open(HKEY_LOCAL_MACHINE, FILESYSTEM_KEY)
        .and_then(|key| key.dword_value("LongPathsEnabled"))
        == Some(1)
}

/// Look up a variable in the user or machine environment store
pub(crate) fn environment_variable(name: &str, scope: EnvScope) -> Option<String> {
    let (root, path) = match scope {
        EnvScope::User => (HKEY_CURRENT_USER, USER_ENVIRONMENT_KEY),
        EnvScope::Machine => (HKEY_LOCAL_MACHINE, MACHINE_ENVIRONMENT_KEY),
    };
    RegKey::open(root, path)?.string_value(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_version_key_is_readable() {
        // Present on every supported Windows release
        let key = RegKey::open(HKEY_LOCAL_MACHINE, CURRENT_VERSION_KEY);
        assert!(key.is_some());
    }

    #[test]
    fn product_version_mentions_build() {
        let version = product_version().unwrap();
        assert!(version.contains("Build"));
    }

    #[test]
    fn absent_value_reads_none() {
        let key = RegKey::open(HKEY_LOCAL_MACHINE, CURRENT_VERSION_KEY).unwrap();
        assert_eq!(key.string_value("SharkNoSuchValue"), None);
        assert_eq!(key.dword_value("SharkNoSuchValue"), None);
    }

    #[test]
    fn absent_key_reads_none() {
        assert!(RegKey::open(HKEY_LOCAL_MACHINE, r"SOFTWARE\SharkNoSuchKey").is_none());
    }
}
