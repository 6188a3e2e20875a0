/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Unit suffixes in order of magnitude. Anything past terabytes stays in `T`.
const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Format a byte count the way `du -h` style tools do: keep dividing by
/// 1024 while the value is at least 1000, then print one decimal place
/// followed by the unit letter.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1}{}", UNITS[unit])
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0.0B");
        assert_eq!(format_size(500), "500.0B");
        assert_eq!(format_size(999), "999.0B");
    }

    #[test]
    fn test_format_size_switches_at_one_thousand() {
        // 1000 bytes is below 1 KiB but already too wide for the byte column.
        assert_eq!(format_size(1000), "1.0K");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(1_000_000), "976.6K");
    }

    #[test]
    fn test_format_size_mgt() {
        assert_eq!(format_size(1_048_576), "1.0M");
        assert_eq!(format_size(1_288_490_189), "1.2G");
        assert_eq!(format_size(1_099_511_627_776), "1.0T");
    }

    #[test]
    fn test_format_size_caps_at_terabytes() {
        assert_eq!(format_size(1024 * 1_099_511_627_776), "1024.0T");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
