//! Guest bootstrap for the VM first stage.
//!
//! This crate builds `virt-bootstrap`, the first userspace program to run
//! inside the guest. It mounts the host-shared folder (9p over virtio,
//! read-only) at `/host`, then replaces itself with the second-stage init at
//! `/virt/init`. If the handoff fails it exits 0. Both outcomes are ignored
//! on purpose: at this point in boot there is no console or logging channel
//! to report into, and the second stage checks `/host` on its own.
//!
//! NOTE: The deployed binary is linked statically (musl) so the guest rootfs
//! does not need a dynamic linker.

pub mod error;
pub mod hostfs;
pub mod stage2;

pub use error::BootError;
pub use hostfs::MountRequest;
pub use stage2::ExecRequest;
