use crate::Result;
use crate::analysis::Analysis;
use core::fmt::Write;

pub fn generate<W: Write>(analysis: &Analysis, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(analysis)?)?;
    Ok(())
}
