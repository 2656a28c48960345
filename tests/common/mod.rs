use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn doctag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("doctag").unwrap();
    cmd.env_remove("DOCTAG_ROOT");
    cmd.env_remove("DOCTAG_PATH");
    cmd
}

/// Build a small documentation tree under `root`:
///
/// ```text
/// doc/tags       count, motion (en)
/// doc/tags-ja    motion (ja)
/// doc/intro.txt, doc/motion.txt, doc/ja/motion.jax
/// ```
#[allow(dead_code)]
pub fn write_help_tree(root: &Path) -> PathBuf {
    let doc = root.join("doc");
    fs::create_dir_all(doc.join("ja")).unwrap();

    fs::write(
        doc.join("tags"),
        "!_TAG_FILE_ENCODING\tutf-8\t//\n\
         count\tintro.txt\t/*count*\n\
         motion\tmotion.txt\t/*motion*\n",
    )
    .unwrap();

    fs::write(doc.join("tags-ja"), "motion\tja/motion.jax\t/*motion*\n").unwrap();

    fs::write(
        doc.join("intro.txt"),
        "INTRODUCTION\n*count* explains counts\nend\n",
    )
    .unwrap();

    let motion_body: Vec<String> = (1..=20)
        .map(|i| {
            if i == 8 {
                "*motion* motions move the cursor".to_string()
            } else {
                format!("motion doc line {}", i)
            }
        })
        .collect();
    fs::write(doc.join("motion.txt"), motion_body.join("\n") + "\n").unwrap();

    fs::write(
        doc.join("ja/motion.jax"),
        "*motion* (japanese)\nbody\n",
    )
    .unwrap();

    doc
}
