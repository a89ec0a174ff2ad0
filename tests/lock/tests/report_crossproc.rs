//! Run reports do not depend on the process environment.
//!
//! The `report_fixture` binary is launched once per environment below; every
//! launch must print the same bytes as the plain one.

use std::path::PathBuf;
use std::process::Command;

struct Launch {
    label: &'static str,
    cwd: Option<PathBuf>,
    env: &'static [(&'static str, &'static str)],
}

fn repo_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or(manifest)
}

fn launch(run: &Launch) -> String {
    let mut command = Command::new(env!("CARGO_BIN_EXE_report_fixture"));
    command.current_dir(run.cwd.clone().unwrap_or_else(repo_root));
    for var in ["LC_ALL", "LC_COLLATE", "LANG", "LANGUAGE"] {
        command.env_remove(var);
    }
    command.envs(run.env.iter().copied());

    let output = command.output().unwrap();
    assert!(output.status.success(), "{}: {output:?}", run.label);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn report_fixture_output_is_environment_independent() {
    let launches = [
        Launch {
            label: "plain",
            cwd: None,
            env: &[],
        },
        Launch {
            label: "temp cwd",
            cwd: Some(std::env::temp_dir()),
            env: &[],
        },
        Launch {
            label: "C locale",
            cwd: None,
            env: &[("LC_ALL", "C"), ("LANG", "C")],
        },
        Launch {
            label: "unrelated vars",
            cwd: None,
            env: &[
                ("PEG_NOISE", "1"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        },
    ];

    let plain = launch(&launches[0]);
    for line in [
        "grid=mirror_line.txt\nfound=true\ncost=3\ntermination_reason=goal_reached",
        "grid=boxed_in.txt\nfound=false\ncost=0\n\
         termination_reason=frontier_exhausted\ntotal_expansions=1",
        "report_digest=sha256:",
        "search_graph_digest=sha256:",
        "start_fingerprint=sha256:",
    ] {
        assert!(plain.contains(line), "{line:?} not in\n{plain}");
    }

    for run in &launches[1..] {
        assert_eq!(launch(run), plain, "{}", run.label);
    }
}
