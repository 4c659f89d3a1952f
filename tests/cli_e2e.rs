//! End-to-end tests for the `dogear` binary.
//!
//! Every test gets its own store file and config directory inside a temp dir,
//! so nothing touches the real `~/.dogear_store`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("config")).unwrap();
        Self { root }
    }

    fn store(&self) -> PathBuf {
        self.root.path().join("store")
    }

    fn store_text(&self) -> String {
        fs::read_to_string(self.store()).unwrap_or_default()
    }

    fn write_store(&self, text: &str) {
        fs::write(self.store(), text).unwrap();
    }

    /// A real directory, as the process will see it as its cwd.
    fn dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::canonicalize(dir).unwrap()
    }

    fn cmd(&self, cwd: &Path) -> Command {
        let mut cmd = Command::cargo_bin("dogear").unwrap();
        cmd.current_dir(cwd)
            .env("DOGEAR_STORE", self.store())
            .env("DOGEAR_CONFIG_DIR", self.root.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("DOGEAR_LOG")
            .env_remove("PWD");
        cmd
    }
}

#[test]
fn fold_then_find_prints_bare_path() {
    let sb = Sandbox::new();
    let work = sb.dir("work");

    sb.cmd(&work)
        .args(["fold", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Folded bookmark: work = "));
    assert_eq!(sb.store_text(), format!("work={}\n", work.display()));

    sb.cmd(&work)
        .args(["find", "work"])
        .assert()
        .success()
        .stdout(format!("{}\n", work.display()));
}

#[test]
fn find_unknown_name_exits_one() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\n");

    sb.cmd(&here)
        .args(["find", "nope"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unknown bookmark: nope"));
}

#[test]
fn fold_rejects_invalid_name() {
    let sb = Sandbox::new();
    let here = sb.dir("here");

    sb.cmd(&here)
        .args(["fold", "bad^name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid bookmark name"));
    assert!(!sb.store().exists());
}

#[test]
fn fold_same_pair_twice_is_a_no_op() {
    let sb = Sandbox::new();
    let work = sb.dir("work");
    sb.cmd(&work).args(["fold", "work"]).assert().success();

    sb.cmd(&work)
        .args(["fold", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already bookmarked"));
    assert_eq!(sb.store_text(), format!("work={}\n", work.display()));
}

#[test]
fn fold_existing_name_overwrites_on_yes() {
    let sb = Sandbox::new();
    let first = sb.dir("first");
    let second = sb.dir("second");
    sb.cmd(&first).args(["fold", "proj"]).assert().success();

    sb.cmd(&second)
        .args(["fold", "proj"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would you like to overwrite it (y/n)?"))
        .stdout(predicate::str::contains("Overwrote bookmark"));
    assert_eq!(sb.store_text(), format!("proj={}\n", second.display()));
}

#[test]
fn fold_existing_name_keeps_store_on_no() {
    let sb = Sandbox::new();
    let first = sb.dir("first");
    let second = sb.dir("second");
    sb.cmd(&first).args(["fold", "proj"]).assert().success();

    sb.cmd(&second)
        .args(["fold", "proj"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarks left unchanged."));
    assert_eq!(sb.store_text(), format!("proj={}\n", first.display()));
}

#[test]
fn fold_existing_path_renames_on_yes() {
    let sb = Sandbox::new();
    let work = sb.dir("work");
    sb.cmd(&work).args(["fold", "old"]).assert().success();

    sb.cmd(&work)
        .args(["fold", "new"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would you like to change the name (y/n)?"));
    assert_eq!(sb.store_text(), format!("new={}\n", work.display()));
}

#[test]
fn fold_prompt_at_end_of_input_declines() {
    let sb = Sandbox::new();
    let work = sb.dir("work");
    sb.cmd(&work).args(["fold", "old"]).assert().success();

    sb.cmd(&work)
        .args(["fold", "new"])
        .write_stdin("")
        .assert()
        .success();
    assert_eq!(sb.store_text(), format!("old={}\n", work.display()));
}

#[test]
fn unfold_removes_current_directory() {
    let sb = Sandbox::new();
    let work = sb.dir("work");
    sb.write_store(&format!("a=/a\nwork={}\n", work.display()));

    sb.cmd(&work)
        .arg("unfold")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfolded bookmark: work = "));
    assert_eq!(sb.store_text(), "a=/a\n");
}

#[test]
fn unfold_unknown_directory_exits_one() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\n");

    sb.cmd(&here)
        .arg("unfold")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("hasn't been bookmarked"));
    assert_eq!(sb.store_text(), "a=/a\n");
}

#[test]
fn like_joins_words_and_matches_case_insensitively() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("My_Proj=/src/a\nother=/tmp/my proj\nzzz=/z\n");

    sb.cmd(&here)
        .args(["like", "MY", "PROJ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other = /tmp/my proj"))
        .stdout(predicate::str::contains("zzz").not());
}

#[test]
fn like_without_matches_succeeds() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\n");

    sb.cmd(&here)
        .args(["like", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks match 'nothing'."));
}

#[test]
fn recent_shows_newest_first() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nb=/b\nc=/c\n");

    let output = sb.cmd(&here).arg("recent").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Recently Added Bookmarks:\n"));
    let c = stdout.find("c = /c").unwrap();
    let a = stdout.find("a = /a").unwrap();
    assert!(c < a);
}

#[test]
fn recent_honors_config_limit() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nb=/b\nc=/c\n");

    sb.cmd(&here)
        .args(["config", "recent-limit", "1"])
        .assert()
        .success();
    sb.cmd(&here)
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains("c = /c"))
        .stdout(predicate::str::contains("b = /b").not());
}

#[test]
fn edit_deletes_accepted_entries() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nb=/b\nc=/c\n");

    sb.cmd(&here)
        .arg("edit")
        .write_stdin("y\nn\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a has been deleted"))
        .stdout(predicate::str::contains("Deleted 2 of 3 bookmarks."));
    assert_eq!(sb.store_text(), "b=/b\n");
}

#[test]
fn edit_quit_leaves_store_untouched() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nb=/b\n");

    sb.cmd(&here)
        .arg("edit")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks deleted."));
    assert_eq!(sb.store_text(), "a=/a\nb=/b\n");
}

#[test]
fn clean_drops_missing_directories() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    let gone = sb.root.path().join("gone");
    sb.write_store(&format!(
        "here={}\ngone={}\n",
        here.display(),
        gone.display()
    ));

    sb.cmd(&here)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed stale bookmark: gone"));
    assert_eq!(sb.store_text(), format!("here={}\n", here.display()));
}

#[test]
fn store_flag_overrides_environment() {
    let sb = Sandbox::new();
    let work = sb.dir("work");
    let other = sb.root.path().join("other_store");

    sb.cmd(&work)
        .args(["--store"])
        .arg(&other)
        .args(["fold", "work"])
        .assert()
        .success();
    assert!(other.exists());
    assert!(!sb.store().exists());
}

#[test]
fn malformed_lines_are_reported_not_fatal() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nbroken\n");

    sb.cmd(&here)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a = /a"))
        .stdout(predicate::str::contains("line 2: broken"));
}

#[test]
fn no_arguments_prints_help() {
    let sb = Sandbox::new();
    let here = sb.dir("here");

    sb.cmd(&here)
        .assert()
        .success()
        .stdout(predicate::str::contains("flipto <bookmark name>"))
        .stdout(predicate::str::contains("Bookmark Commands:"));
}

#[test]
fn shell_prints_flipto_function() {
    let sb = Sandbox::new();
    let here = sb.dir("here");

    sb.cmd(&here)
        .args(["shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flipto()"))
        .stdout(predicate::str::contains("dogear find"));
}

#[test]
fn complete_names_lists_one_per_line() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nb=/b\n");

    sb.cmd(&here)
        .arg("__complete-names")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn edit_keeps_deletions_when_an_answer_is_not_utf8() {
    let sb = Sandbox::new();
    let here = sb.dir("here");
    sb.write_store("a=/a\nb=/b\nc=/c\n");

    sb.cmd(&here)
        .arg("edit")
        .write_stdin(&b"y\n\xff\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("a has been deleted"))
        .stdout(predicate::str::contains("Deleted 1 of 3 bookmarks."));
    assert_eq!(sb.store_text(), "b=/b\nc=/c\n");
}

#[test]
fn fold_prompt_declines_answer_that_is_not_utf8() {
    let sb = Sandbox::new();
    let first = sb.dir("first");
    let second = sb.dir("second");
    sb.cmd(&first).args(["fold", "home"]).assert().success();

    sb.cmd(&second)
        .args(["fold", "home"])
        .write_stdin(&b"\xff\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarks left unchanged."));
    assert_eq!(sb.store_text(), format!("home={}\n", first.display()));
}

#[test]
fn config_bad_value_exits_two() {
    let sb = Sandbox::new();
    let here = sb.dir("here");

    sb.cmd(&here)
        .args(["config", "recent-limit", "zero"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("recent-limit must be a positive number"));
    assert!(!sb.root.path().join("config").join("config.json").exists());
}

#[test]
fn config_unknown_key_exits_two() {
    let sb = Sandbox::new();
    let here = sb.dir("here");

    sb.cmd(&here)
        .args(["config", "nokey"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key: nokey"));
}
