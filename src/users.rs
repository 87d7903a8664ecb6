//! Owner and group name lookup.

use std::collections::HashMap;
use std::ffi::CStr;
use std::mem::MaybeUninit;

const INITIAL_BUFFER_SIZE: usize = 1024;
const MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// Maps numeric ids to display names.
pub trait NameResolver {
    fn user_name(&mut self, uid: u32) -> String;
    fn group_name(&mut self, gid: u32) -> String;
}

/// Resolves names from the system user and group databases.
///
/// Lookups are cached per id. An id without a record resolves to its
/// decimal form.
#[derive(Debug, Default)]
pub struct SystemNames {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl SystemNames {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameResolver for SystemNames {
    fn user_name(&mut self, uid: u32) -> String {
        self.users
            .entry(uid)
            .or_insert_with(|| {
                lookup_user(uid).unwrap_or_else(|| {
                    tracing::debug!(uid, "no passwd entry, using numeric id");
                    uid.to_string()
                })
            })
            .clone()
    }

    fn group_name(&mut self, gid: u32) -> String {
        self.groups
            .entry(gid)
            .or_insert_with(|| {
                lookup_group(gid).unwrap_or_else(|| {
                    tracing::debug!(gid, "no group entry, using numeric id");
                    gid.to_string()
                })
            })
            .clone()
    }
}

/// Fixed id-to-name table. Ids missing from the table resolve to their
/// decimal form, same as [`SystemNames`].
#[derive(Debug, Default, Clone)]
pub struct StaticNames {
    pub users: HashMap<u32, String>,
    pub groups: HashMap<u32, String>,
}

impl StaticNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: &str) -> Self {
        self.users.insert(uid, name.to_string());
        self
    }

    pub fn with_group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(gid, name.to_string());
        self
    }
}

impl NameResolver for StaticNames {
    fn user_name(&mut self, uid: u32) -> String {
        self.users
            .get(&uid)
            .cloned()
            .unwrap_or_else(|| uid.to_string())
    }

    fn group_name(&mut self, gid: u32) -> String {
        self.groups
            .get(&gid)
            .cloned()
            .unwrap_or_else(|| gid.to_string())
    }
}

fn lookup_user(uid: u32) -> Option<String> {
    with_growing_buffer(|buf| {
        let mut pwd = MaybeUninit::<libc::passwd>::uninit();
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: every pointer refers to live storage owned by this frame,
        // and `buf.len()` is the true capacity of `buf`.
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                pwd.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc != 0 {
            return Lookup::Failed(rc);
        }
        if result.is_null() {
            return Lookup::Missing;
        }

        // SAFETY: a non-null result means `pwd` was initialized and its
        // `pw_name` points to a NUL-terminated string inside `buf`.
        let name = unsafe { CStr::from_ptr((*result).pw_name) };
        Lookup::Found(name.to_string_lossy().into_owned())
    })
}

fn lookup_group(gid: u32) -> Option<String> {
    with_growing_buffer(|buf| {
        let mut grp = MaybeUninit::<libc::group>::uninit();
        let mut result: *mut libc::group = std::ptr::null_mut();

        // SAFETY: see `lookup_user`.
        let rc = unsafe {
            libc::getgrgid_r(
                gid,
                grp.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc != 0 {
            return Lookup::Failed(rc);
        }
        if result.is_null() {
            return Lookup::Missing;
        }

        // SAFETY: see `lookup_user`.
        let name = unsafe { CStr::from_ptr((*result).gr_name) };
        Lookup::Found(name.to_string_lossy().into_owned())
    })
}

enum Lookup {
    Found(String),
    Missing,
    Failed(i32),
}

/// Retries `lookup` with a doubled buffer while libc reports `ERANGE`.
fn with_growing_buffer<F>(mut lookup: F) -> Option<String>
where
    F: FnMut(&mut [libc::c_char]) -> Lookup,
{
    let mut size = INITIAL_BUFFER_SIZE;

    loop {
        let mut buf = vec![0 as libc::c_char; size];
        match lookup(&mut buf) {
            Lookup::Found(name) => return Some(name),
            Lookup::Missing => return None,
            Lookup::Failed(libc::ERANGE) if size < MAX_BUFFER_SIZE => size *= 2,
            Lookup::Failed(rc) => {
                tracing::debug!(errno = rc, "name lookup failed");
                return None;
            }
        }
    }
}
