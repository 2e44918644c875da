use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use facedet_vision::Region;

/// Write the detection report: a count line, then one `x1 y1 x2 y2` line
/// per region. Truncates any previous report at the same path.
pub fn write_report(path: &Path, regions: &[Region]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating report {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", regions.len())?;
    for region in regions {
        let (x1, y1) = region.top_left();
        let (x2, y2) = region.bottom_right();
        writeln!(out, "{} {} {} {}", x1, y1, x2, y2)?;
    }

    out.flush()
        .with_context(|| format!("writing report {}", path.display()))
}
