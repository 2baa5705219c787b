#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;

/// The Apache header used by every fixture, with the year the files were
/// first written.
pub const BOILERPLATE: &str = r#"/*
Copyright 2020 Matt Moore

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
"#;

const CODE: &str = "\n// Package foo builds widgets\npackage foo\n";

/// Name of the boilerplate file inside the fixture directory.
pub const BOILERPLATE_FILE: &str = "boilerplate.mm.txt";

/// Name of the fixture directory created by [`write_testdata`].
pub const TESTDATA: &str = "testdata";

/// A correct header whose year is long past.
pub fn old_good() -> String {
  format!("{}{CODE}", BOILERPLATE.replace("2020", "2019"))
}

/// The copyright holder's name is misspelled.
pub fn typo_bad() -> String {
  format!("{}{CODE}", BOILERPLATE.replace("Matt Moore", "Matt More"))
}

/// Every blank line inside the header was dropped.
pub fn trimmed_bad() -> String {
  let header: Vec<&str> = BOILERPLATE
    .lines()
    .enumerate()
    .filter(|(idx, _)| ![2, 6, 8].contains(idx))
    .map(|(_, line)| line)
    .collect();
  format!("{}\n{CODE}", header.join("\n"))
}

/// The license URL uses https.
pub fn https_bad() -> String {
  format!("{}{CODE}", BOILERPLATE.replace("http://", "https://"))
}

/// The indented license URL uses a tab instead of four spaces.
pub fn tab_bad() -> String {
  format!("{}{CODE}", BOILERPLATE.replace("    http://", "\thttp://"))
}

/// The file ends in the middle of the header.
pub fn short_bad() -> String {
  let header: Vec<&str> = BOILERPLATE.lines().take(11).collect();
  format!("{}\n", header.join("\n"))
}

/// No header at all.
pub fn missing_bad() -> String {
  "// Package foo builds widgets\npackage foo\n\nfunc main() {}\n".to_string()
}

/// Every fixture file with its contents.
pub fn fixtures() -> Vec<(&'static str, String)> {
  vec![
    ("old.good.mm", old_good()),
    ("typo.bad.mm", typo_bad()),
    ("trimmed.bad.mm", trimmed_bad()),
    ("https.bad.mm", https_bad()),
    ("tab.bad.mm", tab_bad()),
    ("short.bad.mm", short_bad()),
    ("missing.bad.mm", missing_bad()),
  ]
}

/// Writes the boilerplate and all fixtures into `<dir>/testdata`.
///
/// Returns the path of the fixture directory.
pub fn write_testdata(dir: &Path) -> Result<PathBuf> {
  let testdata = dir.join(TESTDATA);
  fs::create_dir_all(&testdata).with_context(|| format!("Failed to create {}", testdata.display()))?;
  fs::write(testdata.join(BOILERPLATE_FILE), BOILERPLATE)?;
  fs::write(testdata.join("empty.txt"), "")?;
  for (name, content) in fixtures() {
    fs::write(testdata.join(name), content)?;
  }
  Ok(testdata)
}

/// Replaces the `YYYY` placeholder the same way findings do.
pub fn with_current_year(text: &str) -> String {
  text.replace("YYYY", &chrono::Local::now().year().to_string())
}

/// Expected finding for `typo.bad.mm`, with `path` as the reported path.
pub fn typo_finding(path: &str) -> String {
  with_current_year(&format!(
    "{path}:2: found mismatched boilerplate lines:\n[0]:\n\t-: \"Copyright YYYY Matt Moore\"\n\t+: \"Copyright YYYY Matt More\"\n"
  ))
}

/// Expected finding for `trimmed.bad.mm`.
pub fn trimmed_finding(path: &str) -> String {
  format!(
    r#"{path}:3: found mismatched boilerplate lines:
[0->?]:
	-: ""
	+: <non-existent>
[4->?]:
	-: ""
	+: <non-existent>
[6->?]:
	-: ""
	+: <non-existent>
[?->10]:
	-: <non-existent>
	+: ""
[?->11]:
	-: <non-existent>
	+: "// Package foo builds widgets"
[?->12]:
	-: <non-existent>
	+: "package foo"
"#
  )
}

/// Expected finding for `https.bad.mm`.
pub fn https_finding(path: &str) -> String {
  format!(
    r#"{path}:8: found mismatched boilerplate lines:
[0]:
	-: "    http://www.apache.org/licenses/LICENSE-2.0"
	+: "    https://www.apache.org/licenses/LICENSE-2.0"
"#
  )
}

/// Expected finding for `tab.bad.mm`.
pub fn tab_finding(path: &str) -> String {
  format!(
    r#"{path}:8: found mismatched boilerplate lines:
[0]:
	-: "    http://www.apache.org/licenses/LICENSE-2.0"
	+: "\thttp://www.apache.org/licenses/LICENSE-2.0"
"#
  )
}

/// Expected finding for `short.bad.mm`.
pub fn short_finding(path: &str) -> String {
  format!(
    r#"{path}:1: incomplete boilerplate, missing:
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
"#
  )
}

/// Expected finding for `missing.bad.mm`.
pub fn missing_finding(path: &str) -> String {
  format!(
    "{path}:1: missing boilerplate:\n{}",
    with_current_year(&BOILERPLATE.replace("2020", "YYYY"))
  )
}
