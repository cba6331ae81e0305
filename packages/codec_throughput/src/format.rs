//! Pure functions turning raw measurements into display strings.

use std::time::Duration;

use crate::{Measurement, ValidationOutcome};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Width the operation name is padded to in measurement lines.
pub const NAME_WIDTH: usize = 32;

/// Significant digits shown for time-per-operation values.
const TIME_PRECISION: usize = 3;

/// Formats a byte count in binary units.
///
/// # Examples
///
/// ```
/// use codec_throughput::format_bytes;
///
/// assert_eq!(format_bytes(1023), "1023 B");
/// assert_eq!(format_bytes(16384), "16.0 KiB");
/// assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MiB");
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "display rounding swallows any precision loss"
)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    }
}

/// Formats the time of one operation in milliseconds with three significant digits.
///
/// `None` (no operation completed in measurable time) is shown as `∞`.
#[must_use]
pub fn format_time_per_op(time_per_op: Option<Duration>) -> String {
    time_per_op.map_or_else(
        || "∞".to_string(),
        |duration| to_precision(duration.as_secs_f64() * 1000.0, TIME_PRECISION),
    )
}

/// Formats a throughput given in bytes per second as MiB/s with two decimals.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "the constant is exactly representable"
)]
pub fn format_throughput(bytes_per_second: f64) -> String {
    format!("{:.2}", bytes_per_second.max(0.0) / MIB as f64)
}

/// Formats one measurement as `<name> <time> ms → <throughput> MiB/s`.
#[must_use]
pub fn format_measurement_line(measurement: &Measurement) -> String {
    format!(
        "{:<NAME_WIDTH$} {} ms → {} MiB/s",
        measurement.name(),
        format_time_per_op(measurement.time_per_op()),
        format_throughput(measurement.throughput())
    )
}

/// Formats the status of a validation outcome: `OK`, `MISMATCH (...)` or `error (...)`.
#[must_use]
pub fn format_validation(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => "OK".to_string(),
        ValidationOutcome::Mismatch(detail) => format!("MISMATCH ({detail})"),
        ValidationOutcome::Error { message } => format!("error ({message})"),
    }
}

/// Formats `value` with `digits` significant digits, in the manner of JavaScript's
/// `Number.prototype.toPrecision`: positional notation unless the decimal exponent is below
/// -6 or at least `digits`, in which case exponent notation (`1.23e+4`) is used.
fn to_precision(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return "∞".to_string();
    }

    let digits = digits.max(1);
    let mantissa_decimals = digits.saturating_sub(1);

    // Rounding to the requested digits can carry into the next power of ten (9.996 -> 10.0),
    // so the exponent is taken from the already rounded scientific representation.
    let scientific = format!("{value:.mantissa_decimals$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };

    let digits_exponent = i64::try_from(digits).unwrap_or(i64::MAX);

    if exponent < -6 || exponent >= digits_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits_exponent.saturating_sub(1).saturating_sub(exponent))
            .unwrap_or_default();
        format!("{value:.decimals$}")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{MismatchDetail, OperationKind, SampleStats};

    #[test]
    fn bytes_unit_boundaries() {
        assert!(format_bytes(1023).ends_with(" B"));
        assert!(format_bytes(1024).ends_with("KiB"));
        assert!(format_bytes(1024 * 1024 - 1).ends_with("KiB"));
        assert!(format_bytes(1024 * 1024).ends_with("MiB"));
    }

    #[test]
    fn bytes_values() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1024), "1.0 KiB");
        assert_eq!(format_bytes(65536), "64.0 KiB");
        assert_eq!(format_bytes(1536 * 1024), "1.50 MiB");
    }

    #[test]
    fn time_per_op_significant_digits() {
        assert_eq!(format_time_per_op(Some(Duration::from_micros(1234))), "1.23");
        assert_eq!(format_time_per_op(Some(Duration::from_micros(12))), "0.0120");
        assert_eq!(format_time_per_op(Some(Duration::from_millis(250))), "250");
        assert_eq!(format_time_per_op(Some(Duration::from_secs(12))), "1.20e+4");
    }

    #[test]
    fn time_per_op_unbounded() {
        assert_eq!(format_time_per_op(None), "∞");
    }

    #[test]
    fn precision_rounding_carries_exponent() {
        assert_eq!(to_precision(9.996, 3), "10.0");
        assert_eq!(to_precision(999.6, 3), "1.00e+3");
    }

    #[test]
    fn precision_small_values_use_exponent() {
        assert_eq!(to_precision(0.000_001_5, 3), "0.00000150");
        assert_eq!(to_precision(0.000_000_15, 3), "1.50e-7");
        assert_eq!(to_precision(0.0, 3), "0.00");
    }

    #[test]
    fn throughput_in_mebibytes() {
        assert_eq!(format_throughput(1024.0 * 1024.0), "1.00");
        assert_eq!(format_throughput(1.5 * 1024.0 * 1024.0 * 1024.0), "1536.00");
        assert_eq!(format_throughput(0.0), "0.00");
    }

    #[test]
    fn measurement_line_layout() {
        let measurement = Measurement::new(
            OperationKind::Encode,
            "base64::encode(standard)".to_string(),
            1024 * 1024,
            1000,
            Duration::from_secs(1),
            SampleStats::from_rates(&[1000.0; 5]),
        );

        let line = format_measurement_line(&measurement);

        assert_eq!(
            line,
            "base64::encode(standard)         1.00 ms → 1000.00 MiB/s"
        );
    }

    #[test]
    fn measurement_line_unbounded() {
        let measurement = Measurement::new(
            OperationKind::Decode,
            "decode".to_string(),
            1024,
            0,
            Duration::ZERO,
            SampleStats::from_rates(&[]),
        );

        assert!(format_measurement_line(&measurement).ends_with("∞ ms → 0.00 MiB/s"));
    }

    #[test]
    fn validation_statuses() {
        assert_eq!(format_validation(&ValidationOutcome::Valid), "OK");
        assert_eq!(
            format_validation(&ValidationOutcome::Mismatch(MismatchDetail::Length {
                expected: 2,
                actual: 1
            })),
            "MISMATCH (decoded 1 bytes, expected 2)"
        );
        assert_eq!(
            format_validation(&ValidationOutcome::Error {
                message: "bad input".to_string()
            }),
            "error (bad input)"
        );
    }
}
