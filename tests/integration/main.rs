//! Integration tests for rootdigits

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn rootdigits() -> Command {
        let mut cmd = cargo_bin_cmd!("rootdigits");
        cmd.env_remove("ROOTDIGITS_CONFIG");
        cmd
    }

    #[test]
    fn help_displays() {
        rootdigits()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("digits of square and cube roots"));
    }

    #[test]
    fn version_displays() {
        rootdigits()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("rootdigits"));
    }

    #[test]
    fn digits_of_sqrt_two() {
        rootdigits()
            .args(["digits", "2", "-n", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("exponent: 1"))
            .stdout(predicate::str::contains("1414213562"));
    }

    #[test]
    fn digits_of_exact_root_json() {
        rootdigits()
            .args(["digits", "100489", "-n", "10", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"digits\": \"317\""))
            .stdout(predicate::str::contains("\"exact\": true"));
    }

    #[test]
    fn digits_of_cube_root() {
        rootdigits()
            .args(["digits", "2", "--cube", "-n", "6"])
            .assert()
            .success()
            .stdout(predicate::str::contains("125992"));
    }

    #[test]
    fn find_first_matches() {
        rootdigits()
            .args(["find", "2", "14", "-n", "3", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[0,2,144]"));
    }

    #[test]
    fn find_last_requires_limit() {
        rootdigits()
            .args(["find", "2", "14", "--last"])
            .assert()
            .failure();
    }

    #[test]
    fn find_invalid_pattern() {
        rootdigits()
            .args(["find", "2", "1x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid pattern"));
    }

    #[test]
    fn select_encodes() {
        rootdigits()
            .args(["select", "2", "0..4", "--encode"])
            .assert()
            .success()
            .stdout(predicate::str::contains("010e0e"));
    }

    #[test]
    fn zero_denominator_rejected() {
        rootdigits()
            .args(["digits", "1/0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("denominator must be positive"));
    }

    #[test]
    fn config_path() {
        rootdigits()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_init_and_show() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let path = path.to_str().unwrap();

        rootdigits()
            .args(["--config", path, "config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));

        rootdigits()
            .args(["--config", path, "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[memo]"));
    }

    #[test]
    fn invalid_config_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[memo]\nchunk_size = 0\n").unwrap();

        rootdigits()
            .args(["--config", path.to_str().unwrap(), "digits", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}

mod root_tests {
    use num_bigint::BigInt;
    use rootdigits::digits::Digits;
    use rootdigits::positions::{Positions, PositionsBuilder};
    use rootdigits::root::Root;
    use rootdigits::search::{find_all, find_backward};
    use std::thread;

    /// Mantissa digits of sqrt(n) for integer n < 100, via integer square root
    fn reference_sqrt(n: u32, count: usize) -> Vec<u8> {
        let scaled = BigInt::from(n) * BigInt::from(10u32).pow(2 * (count as u32 - 1));
        scaled
            .sqrt()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect()
    }

    /// Mantissa digits of cbrt(n) for integer n < 1000, via integer cube root
    fn reference_cbrt(n: u32, count: usize) -> Vec<u8> {
        let scaled = BigInt::from(n) * BigInt::from(10u32).pow(3 * (count as u32 - 1));
        scaled
            .cbrt()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect()
    }

    #[test]
    fn sqrt_seven_two_threads() {
        const COUNT: usize = 10_000;
        let root = Root::sqrt(7).unwrap();
        let expected = reference_sqrt(7, COUNT);
        assert_eq!(expected.len(), COUNT);

        thread::scope(|s| {
            s.spawn(|| {
                let forward: Vec<u8> = root.digits_from(0).take(COUNT).collect();
                assert_eq!(forward, expected);
            });
            s.spawn(|| {
                for i in (0..COUNT).rev() {
                    assert_eq!(root.at(i), Some(expected[i]), "digit {}", i);
                }
            });
        });
    }

    #[test]
    fn many_readers_see_same_digits() {
        let root = Root::sqrt(3).unwrap();
        let expected = reference_sqrt(3, 1500);

        thread::scope(|s| {
            for t in 0..8 {
                let root = root.clone();
                let expected = &expected;
                s.spawn(move || {
                    for i in (t..1500).step_by(8).rev() {
                        assert_eq!(root.at(i), Some(expected[i]));
                    }
                });
            }
        });
    }

    #[test]
    fn cube_roots_match_reference() {
        for n in [2u32, 3, 10, 999] {
            let root = Root::cube_root(n).unwrap();
            assert_eq!(root.first_n(300), reference_cbrt(n, 300), "cbrt({})", n);
        }
    }

    #[test]
    fn square_roots_match_reference() {
        for n in [2u32, 5, 10, 99] {
            let root = Root::sqrt(n).unwrap();
            assert_eq!(root.first_n(300), reference_sqrt(n, 300), "sqrt({})", n);
        }
    }

    #[test]
    fn exact_root_example() {
        let root = Root::sqrt(100489).unwrap();
        assert_eq!(root.exponent(), 3);
        assert_eq!(root.first_n(100), vec![3, 1, 7]);
        assert_eq!(root.at(3), None);
    }

    #[test]
    fn forward_and_backward_search_agree() {
        let root = Root::sqrt(2).unwrap().with_significant(5000);
        let digits = root.to_vec();
        for pattern in [&[1u8, 4][..], &[9, 9], &[0, 0, 0], &[]] {
            let forward = find_all(&root, pattern);
            let mut backward: Vec<usize> = find_backward(&root, pattern).collect();
            backward.reverse();
            assert_eq!(forward, backward);
            for &i in &forward {
                assert_eq!(&digits[i..i + pattern.len()], pattern);
            }
        }
    }

    #[test]
    fn sparse_digits_round_trip() {
        let root = Root::cube_root(5).unwrap();
        let positions = PositionsBuilder::new()
            .add_range(3000, 3010)
            .add(7)
            .add_range(-4, 3)
            .add(2999)
            .build();
        assert_eq!(positions, Positions::parse("0..3,7,2999..3010").unwrap());

        let digits = Digits::from_sequence(&root, &positions);
        assert_eq!(digits.len(), 15);
        assert_eq!(Digits::from_bytes(&digits.to_bytes()).unwrap(), digits);
        assert_eq!(Digits::from_text(&digits.to_text()).unwrap(), digits);
    }
}
