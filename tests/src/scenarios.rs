use std::fs;

use dialr_common::config::{Config, CountMethod};
use dialr_common::rotation::Rotation;
use dialr_core::dial::Dial;
use dialr_core::error::InputError;
use dialr_core::{parser, password};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn write_input(contents: &str) -> anyhow::Result<(tempfile::TempDir, Config)> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input1.txt");
    fs::write(&input, contents)?;
    let cfg = Config {
        input,
        method: CountMethod::Landing,
    };
    Ok((dir, cfg))
}

/// File -> parser -> dial, the same pipeline the binary runs.
#[test]
fn landing_pipeline_from_file() -> anyhow::Result<()> {
    let (_dir, cfg) = write_input("R50\nL100\nR50\n")?;

    let rotations: Vec<Rotation> = parser::parse_file(&cfg.input)?;
    assert_eq!(password::positions(&rotations), vec![0, 0, 50]);
    assert_eq!(password::count_zeros(&rotations, cfg.method), 2);
    Ok(())
}

#[test]
fn zero_rotation_from_file() -> anyhow::Result<()> {
    let (_dir, cfg) = write_input("R0\n")?;

    let rotations = parser::parse_file(&cfg.input)?;
    assert_eq!(password::count_zeros(&rotations, cfg.method), 0);
    Ok(())
}

#[test]
fn missing_file_is_the_only_file_access_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = parser::parse_file(&dir.path().join("nope.txt"));
    assert!(matches!(missing, Err(InputError::FileAccess { .. })));

    let (_dir, cfg) = write_input("R5\n?\n")?;
    let malformed = parser::parse_file(&cfg.input);
    assert!(matches!(malformed, Err(ref e) if !e.is_file_access()));
    Ok(())
}

/// Random input files: every reported position is in range and the landing
/// count agrees with the positions.
#[test]
fn random_files_stay_on_the_dial() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0xd1a1);

    for _ in 0..50 {
        let lines: Vec<String> = (0..rng.random_range(1..200))
            .map(|_| {
                let dir = if rng.random_bool(0.5) { 'L' } else { 'R' };
                format!("{dir}{}", rng.random_range(0..1_000u32))
            })
            .collect();
        let (_dir, cfg) = write_input(&lines.join("\n"))?;

        let rotations = parser::parse_file(&cfg.input)?;
        assert_eq!(rotations.len(), lines.len());

        let positions = password::positions(&rotations);
        assert!(positions.iter().all(|&p| p < Dial::SIZE));

        let landings = positions.iter().filter(|&&p| p == 0).count() as u64;
        let landed = password::count_zeros(&rotations, CountMethod::Landing);
        assert_eq!(landed, landings);

        let passed = password::count_zeros(&rotations, CountMethod::Passing);
        assert!(passed >= landings);
    }
    Ok(())
}
