use crate::domain::model::Point;
use crate::utils::error::Result;
use std::io::{self, Write};

pub fn format_point(p: Point) -> String {
    format!("Point: {}", p)
}

pub fn write_point<W: Write>(out: &mut W, p: Point) -> Result<()> {
    writeln!(out, "{}", format_point(p))?;
    Ok(())
}

/// Prints `Point: (x, y)` to stdout. Write failures are ignored.
pub fn print_point(p: Point) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_point(&mut handle, p);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(p: Point) -> String {
        let mut buf = Vec::new();
        write_point(&mut buf, p).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_point() {
        assert_eq!(render(Point::new(3, 4)), "Point: (3, 4)\n");
        assert_eq!(render(Point::new(-1, 0)), "Point: (-1, 0)\n");
        assert_eq!(render(Point::new(i32::MIN, i32::MAX)), "Point: (-2147483648, 2147483647)\n");
    }

    #[test]
    fn test_format_point_has_no_newline() {
        assert_eq!(format_point(Point::new(10, 20)), "Point: (10, 20)");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_point_reports_io_error() {
        assert!(write_point(&mut BrokenPipe, Point::new(1, 2)).is_err());
    }
}
