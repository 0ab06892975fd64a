use std::process::Command;

use bmp2html::{convert_file, BmpError, ConvertError};

use super::{bmp_bytes, table_colors, temp_path};

const EXE: &str = env!("CARGO_BIN_EXE_bmp2html");

/// Failures exit with -1, which unix reports as 255.
fn assert_exit_minus_one(status: std::process::ExitStatus) {
  assert!(!status.success());
  #[cfg(unix)]
  assert_eq!(status.code(), Some(255));
}

#[test]
fn test_usage_exits_zero() {
  let out = Command::new(EXE).arg("only_one_arg").output().unwrap();
  assert!(out.status.success());
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("[input_bmp_filename] [output_html_filename]"));
}

#[test]
fn test_missing_input_fails() {
  let input = temp_path("does_not_exist.bmp");
  let output = temp_path("missing_input.html");
  let out = Command::new(EXE).arg(&input).arg(&output).output().unwrap();
  assert_exit_minus_one(out.status);
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("Error opening input BMP file"));
  assert!(stdout.contains("does_not_exist.bmp"));
  assert!(matches!(convert_file(&input, &output), Err(ConvertError::InputOpen { .. })));
}

#[test]
fn test_bad_header_writes_nothing() {
  let input = temp_path("size20.bmp");
  let output = temp_path("size20.html");
  let mut v = bmp_bytes(40, 1, 1, &[&[[0; 3]]]);
  v[14..18].copy_from_slice(&20_u32.to_le_bytes());
  std::fs::write(&input, v).unwrap();
  let _ = std::fs::remove_file(&output);

  let out = Command::new(EXE).arg(&input).arg(&output).output().unwrap();
  assert_exit_minus_one(out.status);
  assert!(String::from_utf8_lossy(&out.stdout).contains("Length 20"));
  assert!(!output.exists());
  assert!(matches!(
    convert_file(&input, &output),
    Err(ConvertError::Bmp(BmpError::UnsupportedHeaderSize(20)))
  ));
  assert!(!output.exists());
  std::fs::remove_file(&input).unwrap();
}

#[test]
fn test_unwritable_output_fails() {
  let input = temp_path("ok_for_bad_output.bmp");
  std::fs::write(&input, bmp_bytes(40, 1, 1, &[&[[0; 3]]])).unwrap();
  let output = temp_path("no_such_dir").join("out.html");
  let out = Command::new(EXE).arg(&input).arg(&output).output().unwrap();
  assert_exit_minus_one(out.status);
  assert!(String::from_utf8_lossy(&out.stdout).contains("Error opening output HTML file"));
  assert!(matches!(convert_file(&input, &output), Err(ConvertError::OutputOpen { .. })));
  std::fs::remove_file(&input).unwrap();
}

#[test]
fn test_successful_conversion() {
  let input = temp_path("ok.bmp");
  let output = temp_path("ok.html");
  std::fs::write(&input, bmp_bytes(40, 2, 1, &[&[[0x33, 0x22, 0x11], [5, 0, 0]]])).unwrap();
  let out = Command::new(EXE).env_remove("BMP2HTML_LOG").arg(&input).arg(&output).output().unwrap();
  assert!(out.status.success());
  assert!(out.stdout.is_empty());
  assert!(out.stderr.is_empty());
  let html = std::fs::read_to_string(&output).unwrap();
  assert_eq!(table_colors(&html), [["112233", "000005"]]);
  std::fs::remove_file(&input).unwrap();
  std::fs::remove_file(&output).unwrap();
}

#[test]
fn test_log_level_from_env() {
  let input = temp_path("logged.bmp");
  let output = temp_path("logged.html");
  std::fs::write(&input, bmp_bytes(40, 3, 2, &[&[[0; 3]; 3], &[[0; 3]; 3]])).unwrap();
  let out =
    Command::new(EXE).env("BMP2HTML_LOG", "debug").arg(&input).arg(&output).output().unwrap();
  assert!(out.status.success());
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("is 3x2"), "{stderr}");
  std::fs::remove_file(&input).unwrap();
  std::fs::remove_file(&output).unwrap();
}
