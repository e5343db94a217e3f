//! Host-shared folder mount.
//!
//! The host exports a directory tree over 9p on a virtio transport; the
//! guest sees it under the fixed tag `hostfs` and mounts it read-only at
//! `/host` before anything else runs.

use crate::error::BootError;
use nix::mount::{MsFlags, mount};

/// virtio-9p tag configured on the host side.
pub const HOST_SHARE_TAG: &str = "hostfs";

/// Where the share appears in the guest namespace.
pub const HOST_MOUNT_POINT: &str = "/host";

/// A fixed mount request. Every field is a compile-time constant; the
/// request is built once and issued at most once.
#[derive(Debug, Clone)]
pub struct MountRequest {
    pub source: &'static str,
    pub target: &'static str,
    pub fstype: &'static str,
    pub flags: MsFlags,
    pub data: &'static str,
}

impl MountRequest {
    /// The host-shared folder: 9p over virtio, read-only, at `/host`.
    pub fn host_share() -> Self {
        Self {
            source: HOST_SHARE_TAG,
            target: HOST_MOUNT_POINT,
            fstype: "9p",
            flags: MsFlags::MS_RDONLY,
            data: "trans=virtio,version=9p2000.L",
        }
    }

    /// Issue the mount. The bootstrap discards the result: there is nowhere
    /// to report failure this early in boot, and the second stage finds
    /// `/host` empty if the share never attached.
    pub fn issue(&self) -> Result<(), BootError> {
        tracing::debug!(
            "mounting {} ({}) at {} with {}",
            self.source,
            self.fstype,
            self.target,
            self.data
        );

        mount(
            Some(self.source),
            self.target,
            Some(self.fstype),
            self.flags,
            Some(self.data),
        )
        .map_err(BootError::Mount)
    }
}
