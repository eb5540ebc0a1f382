//! Operating system entropy
//!
//! Each platform submodule exposes the same function,
//! `sys_random(&mut [u8]) -> Result<()>`, selected at compile time. The
//! higher layers only ever see the re-exported function and never touch
//! the platform APIs directly.
//!
//! Failures are reported as [`RandomError::EntropyUnavailable`] rather than
//! panicking, so callers decide how to surface them.
//!
//! [`RandomError::EntropyUnavailable`]: crate::error::RandomError::EntropyUnavailable

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
