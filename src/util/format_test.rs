use super::*;

#[test]
fn format_file_size_maps_zero_to_zero_bytes() {
    assert_eq!(format_file_size(0.0), "0 Bytes");
}

#[test]
fn format_file_size_uses_exact_unit_boundaries() {
    assert_eq!(format_file_size(1024.0), "1 KB");
    assert_eq!(format_file_size(1_048_576.0), "1 MB");
    assert_eq!(format_file_size(1_073_741_824.0), "1 GB");
}

#[test]
fn format_file_size_trims_trailing_zeros() {
    assert_eq!(format_file_size(1536.0), "1.5 KB");
    assert_eq!(format_file_size(1_126_400.0), "1.07 MB");
    assert_eq!(format_file_size(500.0), "500 Bytes");
}

#[test]
fn format_file_size_rounds_to_two_decimals() {
    // 1234 / 1024 = 1.2051.. -> 1.21
    assert_eq!(format_file_size(1234.0), "1.21 KB");
    // 1100 / 1024 = 1.0742.. -> 1.07
    assert_eq!(format_file_size(1100.0), "1.07 KB");
}

#[test]
fn format_file_size_rounds_ties_away_from_zero() {
    // 1152 / 1024 = 1.125 and 3200 / 1024 = 3.125, both exact ties.
    assert_eq!(format_file_size(1152.0), "1.13 KB");
    assert_eq!(format_file_size(3200.0), "3.13 KB");
}

#[test]
fn format_file_size_clamps_to_largest_unit() {
    // 5 TB worth of bytes still renders in GB.
    assert_eq!(format_file_size(5.0 * 1024.0 * 1_073_741_824.0), "5120 GB");
}

#[test]
fn format_file_size_treats_invalid_input_as_empty() {
    assert_eq!(format_file_size(-42.0), "0 Bytes");
    assert_eq!(format_file_size(f64::NAN), "0 Bytes");
    assert_eq!(format_file_size(f64::INFINITY), "0 Bytes");
}
