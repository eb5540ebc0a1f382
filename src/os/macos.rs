use libc::{arc4random_buf, c_void};

use crate::error::Result;

/// `arc4random_buf` cannot fail, so this always returns `Ok`.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }

    Ok(())
}
