//! First-stage guest init.
//!
//! Runs as the guest's initial process: mount the host share, hand off to
//! `/virt/init`, and exit 0 if the handoff fails. Reads no arguments and no
//! environment, writes nothing to any stream, installs no tracing
//! subscriber.

use virt_guest::{ExecRequest, MountRequest};

fn main() {
    // Result intentionally discarded: the second stage checks /host itself.
    let _ = MountRequest::host_share().issue();

    // Returns only if the kernel rejected the handoff.
    let _ = ExecRequest::second_stage().issue();

    // No fallback second stage exists; end the process cleanly.
    unsafe { libc::_exit(0) }
}
