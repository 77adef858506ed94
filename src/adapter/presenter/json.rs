use std::io::Write;

use crate::domain::Report;
use crate::error::Result;
use crate::port::Presenter;

/// Pretty-printed JSON of the whole tree, for scripting.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn present(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}
