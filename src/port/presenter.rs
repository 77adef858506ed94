//! Report rendering port.

use std::io::Write;

use crate::domain::Report;
use crate::error::Result;

/// Renders a finished report. The core never depends on the format.
pub trait Presenter {
    fn present(&self, report: &Report, out: &mut dyn Write) -> Result<()>;
}
