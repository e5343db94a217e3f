//! Handoff to the second-stage init.
//!
//! The real guest bring-up (device enumeration, services, shutdown) lives in
//! `/virt/init`, installed into the rootfs by the host-side tooling. The
//! bootstrap's only job is to reach it.

use crate::error::BootError;
use std::convert::Infallible;
use std::ffi::{CStr, CString};

/// Path of the second-stage init inside the guest rootfs.
pub const SECOND_STAGE: &CStr = c"/virt/init";

/// An execve request: a program path, an argv holding exactly that path,
/// and an empty environment. Built once; issuing it ends this program on
/// success.
#[derive(Debug, Clone)]
pub struct ExecRequest {
    path: CString,
    argv: Vec<CString>,
}

impl ExecRequest {
    pub fn new(path: &CStr) -> Self {
        Self {
            path: path.to_owned(),
            argv: vec![path.to_owned()],
        }
    }

    /// The fixed `/virt/init` handoff.
    pub fn second_stage() -> Self {
        Self::new(SECOND_STAGE)
    }

    pub fn path(&self) -> &CStr {
        &self.path
    }

    pub fn argv(&self) -> &[CString] {
        &self.argv
    }

    /// Replace the current process image. Returns only if the kernel
    /// rejected the request; the new image starts with an empty environment.
    pub fn issue(&self) -> Result<Infallible, BootError> {
        tracing::debug!("handing off to {:?}", self.path);

        nix::unistd::execve::<CString, &CStr>(&self.path, &self.argv, &[])
            .map_err(BootError::Exec)
    }
}
