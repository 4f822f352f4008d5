use crate::shared::error::CollectionError;
use crate::shared::metrics::capture;
use regex::Regex;
use std::sync::LazyLock;

const CATEGORY: &str = "clock";

// The channel index is whatever vcgencmd reports and is not checked.
static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^frequency\([0-9]+\)=([0-9]+)\n$").expect("clock pattern is valid")
});

/// Parses `frequency(<index>)=<hz>\n` into Hz, unscaled.
pub fn parse_clock(out: &str) -> Result<f64, CollectionError> {
    capture(&CLOCK_PATTERN, CATEGORY, out)?
        .parse::<u64>()
        .map(|hz| hz as f64)
        .map_err(|_| CollectionError::parse(CATEGORY, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frequency() {
        assert_eq!(parse_clock("frequency(50)=200000000\n").unwrap(), 200000000.0);
        assert_eq!(parse_clock("frequency(48)=1500398464\n").unwrap(), 1500398464.0);
        assert_eq!(parse_clock("frequency(0)=0\n").unwrap(), 0.0);
    }

    #[test]
    fn ignores_channel_index() {
        assert_eq!(
            parse_clock("frequency(1)=600000000\n").unwrap(),
            parse_clock("frequency(45)=600000000\n").unwrap()
        );
    }

    #[test]
    fn rejects_malformed_output() {
        for raw in [
            "",
            "frequency(50)=200000000",
            "frequency()=200000000\n",
            "frequency(50)=\n",
            "frequency(50)=2.5\n",
            "frequency(50)=-1\n",
            "freq(50)=200000000\n",
            "frequency(x)=200000000\n",
            "frequency(50)=200000000\nfrequency(50)=200000000\n",
            "frequency(50)=99999999999999999999999\n",
        ] {
            assert!(
                matches!(parse_clock(raw), Err(CollectionError::Parse { category: "clock", .. })),
                "{:?} should not parse",
                raw
            );
        }
    }
}
