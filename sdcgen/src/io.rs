//! IO utilities.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::emit::ConstraintSet;
use crate::error::{with_err_context, ErrorContext, Result};

pub fn create_file(path: impl AsRef<Path>) -> Result<std::fs::File> {
    let path = path.as_ref();
    let file = with_err_context(std::fs::File::create(path), || {
        ErrorContext::CreateFile(path.to_path_buf())
    })?;
    Ok(file)
}

/// Writes every line of `set` to a newly created file at `path`.
pub fn write_sdc(path: impl AsRef<Path>, set: &ConstraintSet) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(create_file(path)?);
    with_err_context(
        set.write(&mut out).and_then(|_| Ok(out.flush()?)),
        || ErrorContext::Task(arcstr::format!("writing constraints to {path:?}")),
    )?;
    Ok(())
}
