use std::process::Command;
use std::str;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    // The generator's own version, shown by --version. Headers it writes use
    // the describe string of whatever repository it is run in instead.
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output();

    let git_tag = match output {
        Ok(o) if o.status.success() => str::from_utf8(&o.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        Ok(o) => {
            println!(
                "cargo:warning=git describe failed: {}",
                String::from_utf8_lossy(&o.stderr).trim()
            );
            String::new()
        }
        Err(err) => {
            println!("cargo:warning=could not run git: {err}");
            String::new()
        }
    };

    let git_tag = if git_tag.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        git_tag
    };

    println!("cargo:rustc-env=GIT_TAG={git_tag}");
}
