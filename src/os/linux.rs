//! Linux entropy via the `getrandom` system call
//!
//! `getrandom` reads straight from the kernel pool and blocks only until the
//! pool is initialised at boot, which makes it suitable for every call site
//! in this crate, including seeding the DRBG.

use libc::{EINTR, c_void, getrandom};
use tracing::error;

use crate::error::{RandomError, Result};

/// Fills `buf` with random bytes from the kernel.
///
/// Short reads are continued until the buffer is full and `EINTR` is
/// retried. Any other failure is returned as `EntropyUnavailable`.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }
            error!(%err, "getrandom() failed");
            return Err(RandomError::EntropyUnavailable(format!("getrandom: {err}")));
        }

        filled += ret as usize;
    }

    Ok(())
}
