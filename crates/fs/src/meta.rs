//! Optional extended metadata: POSIX mode, ownership and link counts.
//!
//! Platforms without POSIX semantics get [`NullProvider`], which reports
//! nothing instead of failing.

use std::fs::Metadata;

/// Raw POSIX fields pulled from one `stat` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extended {
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub links: u64,
}

pub trait MetadataProvider {
    fn extended(&self, metadata: &Metadata) -> Option<Extended>;

    /// Resolve a uid to an account name. `None` when there is no match.
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Resolve a gid to a group name. `None` when there is no match.
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Provider for platforms without POSIX metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProvider;

impl MetadataProvider for NullProvider {
    fn extended(&self, _metadata: &Metadata) -> Option<Extended> {
        None
    }

    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

#[cfg(unix)]
pub use posix::PosixProvider;

#[cfg(unix)]
pub fn default_provider() -> &'static dyn MetadataProvider {
    &PosixProvider
}

#[cfg(not(unix))]
pub fn default_provider() -> &'static dyn MetadataProvider {
    &NullProvider
}

#[cfg(unix)]
mod posix {
    use std::ffi::CStr;
    use std::fs::Metadata;
    use std::os::unix::fs::MetadataExt;

    use super::{Extended, MetadataProvider};

    const INITIAL_BUF_LEN: usize = 1024;
    const MAX_BUF_LEN: usize = 1 << 16;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct PosixProvider;

    impl MetadataProvider for PosixProvider {
        fn extended(&self, metadata: &Metadata) -> Option<Extended> {
            Some(Extended {
                mode: metadata.mode(),
                uid: metadata.uid(),
                gid: metadata.gid(),
                links: metadata.nlink(),
            })
        }

        fn user_name(&self, uid: u32) -> Option<String> {
            let mut buf = vec![0 as libc::c_char; INITIAL_BUF_LEN];

            loop {
                // SAFETY: all-zero is a valid bit pattern for `passwd`, which
                // only holds pointers and integers.
                let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
                let mut result: *mut libc::passwd = std::ptr::null_mut();

                // SAFETY: every pointer refers to live, correctly sized storage
                // owned by this frame.
                let rc = unsafe {
                    libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
                };

                if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
                    buf.resize(buf.len() * 2, 0);
                    continue;
                }
                if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
                    return None;
                }

                // SAFETY: on success `pw_name` points to a NUL-terminated
                // string inside `buf`, which is still alive.
                let name = unsafe { CStr::from_ptr(pwd.pw_name) };
                return Some(name.to_string_lossy().into_owned());
            }
        }

        fn group_name(&self, gid: u32) -> Option<String> {
            let mut buf = vec![0 as libc::c_char; INITIAL_BUF_LEN];

            loop {
                // SAFETY: see `user_name`.
                let mut grp: libc::group = unsafe { std::mem::zeroed() };
                let mut result: *mut libc::group = std::ptr::null_mut();

                // SAFETY: see `user_name`.
                let rc = unsafe {
                    libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut result)
                };

                if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
                    buf.resize(buf.len() * 2, 0);
                    continue;
                }
                if rc != 0 || result.is_null() || grp.gr_name.is_null() {
                    return None;
                }

                // SAFETY: see `user_name`.
                let name = unsafe { CStr::from_ptr(grp.gr_name) };
                return Some(name.to_string_lossy().into_owned());
            }
        }
    }
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
