use std::io::{self, Write};
use std::time::Duration;

pub const LIVE_CHAR: u8 = b'#';
pub const DEAD_CHAR: u8 = b' ';

/// Delay between two rendered generations.
pub const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Write one frame: a line per row, then a blank separator line.
pub fn write_frame<W, I, R>(out: &mut W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = bool>,
{
    let mut line = Vec::new();
    for row in rows {
        line.clear();
        line.extend(row.into_iter().map(|alive| if alive { LIVE_CHAR } else { DEAD_CHAR }));
        line.push(b'\n');
        out.write_all(&line)?;
    }
    out.write_all(b"\n")?;
    out.flush()
}
