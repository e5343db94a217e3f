use thiserror::Error;

/// The two privileged requests the bootstrap issues. The bootstrap binary
/// discards these, but the typed errno keeps the library testable.
#[derive(Error, Debug)]
pub enum BootError {
    #[error("mount of host share failed: {0}")]
    Mount(nix::errno::Errno),

    #[error("exec of second stage failed: {0}")]
    Exec(nix::errno::Errno),
}
