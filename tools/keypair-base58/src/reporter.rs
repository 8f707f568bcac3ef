use std::io::{self, Write};

/// Writes the encoded key as a single line and flushes the writer.
pub fn report<W: Write>(out: &mut W, encoded: &str) -> io::Result<()> {
    writeln!(out, "{encoded}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_writes_single_line() {
        let mut out = Vec::new();
        report(&mut out, "4wBqpZM9xaSheZzJSMawUKKwhdpChKbZ5eu5ky4Vigw").unwrap();
        assert_eq!(out, b"4wBqpZM9xaSheZzJSMawUKKwhdpChKbZ5eu5ky4Vigw\n");
    }
}
