//! Terminal size detection.

/// Column count used when the terminal size can't be detected.
pub const DEFAULT_COLUMNS: u16 = 100;

/// Row count used when the terminal size can't be detected.
pub const DEFAULT_ROWS: u16 = 28;

/// Current terminal size as `(columns, rows)`.
///
/// Falls back to [`DEFAULT_COLUMNS`] x [`DEFAULT_ROWS`] when stdout isn't a
/// terminal or reports a zero dimension.
pub fn size() -> (u16, u16) {
    detect().unwrap_or((DEFAULT_COLUMNS, DEFAULT_ROWS))
}

/// Detected terminal size, or `None` (with a warning) when unavailable.
pub fn detect() -> Option<(u16, u16)> {
    resolve(crossterm::terminal::size())
}

fn resolve(detected: std::io::Result<(u16, u16)>) -> Option<(u16, u16)> {
    match detected {
        Ok((cols, rows)) if cols > 0 && rows > 0 => Some((cols, rows)),
        Ok((cols, rows)) => {
            log::warn!(
                "Terminal reported {}x{}, using {}x{}",
                cols,
                rows,
                DEFAULT_COLUMNS,
                DEFAULT_ROWS
            );
            None
        }
        Err(e) => {
            log::warn!(
                "Couldn't detect terminal size ({}), using {}x{}",
                e,
                DEFAULT_COLUMNS,
                DEFAULT_ROWS
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_size_passes_through() {
        assert_eq!(resolve(Ok((120, 40))), Some((120, 40)));
    }

    #[test]
    fn test_zero_dimension_falls_back() {
        assert_eq!(resolve(Ok((0, 40))), None);
        assert_eq!(resolve(Ok((80, 0))), None);
    }

    #[test]
    fn test_error_falls_back() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "not a tty");
        assert_eq!(resolve(Err(err)), None);
    }

    #[test]
    fn test_size_is_never_zero() {
        let (cols, rows) = size();
        assert!(cols > 0 && rows > 0);
    }
}
