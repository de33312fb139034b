use std::process::Command;

#[test]
fn test_driver_prints_every_exponent() {
    let output = Command::new(env!("CARGO_BIN_EXE_bit_log2"))
        .output()
        .expect("failed to run bit_log2");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(32, lines.len());
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(i.to_string(), *line, "line {}", i);
    }
    assert_eq!("0", lines[0]);
    assert_eq!("5", lines[5]);
    assert_eq!("31", lines[31]);
    assert!(stdout.ends_with("31\n"));
}
