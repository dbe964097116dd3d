//! End-to-end resolution and search over a real filesystem layout.
//!
//! Builds a throwaway home directory plus system-wide fallback directories,
//! points the handle at them through a fake environment, and checks that
//! layered files come back in precedence order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use basedir::{BaseDirectories, EnvProvider, path_list};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct FakeEnv(Rc<RefCell<HashMap<String, String>>>);

impl FakeEnv {
    fn set(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

impl EnvProvider for FakeEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.0.borrow().get(name).cloned()
    }
}

fn write_under(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative.trim_start_matches('/'));
    fs::create_dir_all(path.parent().expect("relative path has a parent"))
        .expect("create parent dirs");
    fs::write(path, contents).expect("write fragment");
}

#[test]
fn layered_config_fragments_come_back_in_precedence_order() {
    let home = TempDir::new().expect("home dir");
    let site = TempDir::new().expect("site config dir");
    let vendor = TempDir::new().expect("vendor config dir");

    write_under(&home.path().join(".config"), "/app/conf", "from-home");
    write_under(vendor.path(), "/app/conf", "from-vendor");

    let env = FakeEnv::default();
    env.set("HOME", &home.path().to_string_lossy());
    env.set(
        "XDG_CONFIG_DIRS",
        &path_list::join([
            site.path().to_string_lossy(),
            vendor.path().to_string_lossy(),
        ]),
    );

    let dirs = BaseDirectories::with_env(env).expect("resolve");
    let found = dirs.find_config_files("/app/conf");

    assert_eq!(found.len(), 2, "home and vendor copies exist, site does not");
    assert!(found[0].starts_with(home.path()), "home copy comes first");
    assert!(found[1].starts_with(vendor.path()));

    let mut contents = String::new();
    dirs.open_config_file("/app/conf", OpenOptions::new().read(true))
        .expect("highest-precedence copy opens")
        .read_to_string(&mut contents)
        .expect("read fragment");
    assert_eq!(contents, "from-home");
}

#[test]
fn directory_names_with_colons_resolve_through_escaping() {
    let home = TempDir::new().expect("home dir");
    let odd = TempDir::new().expect("parent of colon dir");
    let colon_dir = odd.path().join("odd:dir");
    write_under(&colon_dir, "/app/data.bin", "payload");

    let env = FakeEnv::default();
    env.set("HOME", &home.path().to_string_lossy());
    env.set(
        "XDG_DATA_DIRS",
        &path_list::join([colon_dir.to_string_lossy()]),
    );

    let dirs = BaseDirectories::with_env(env).expect("resolve");

    assert_eq!(dirs.data_dirs(), [colon_dir.clone()]);
    assert_eq!(dirs.find_data_files("/app/data.bin"), vec![
        dirs.searchable_data_dirs()[1].join("app/data.bin")
    ]);
}

#[test]
fn refresh_tracks_a_relocated_home() {
    let first_home = TempDir::new().expect("first home");
    let second_home = TempDir::new().expect("second home");
    let fallback = TempDir::new().expect("fallback data dir");
    write_under(&first_home.path().join(".local/share"), "/app/db", "old");
    write_under(&second_home.path().join(".local/share"), "/app/db", "new");

    let env = FakeEnv::default();
    env.set("HOME", &first_home.path().to_string_lossy());
    env.set("XDG_DATA_DIRS", &fallback.path().to_string_lossy());
    let mut dirs = BaseDirectories::with_env(env.clone()).expect("resolve");
    assert!(dirs.find_data_files("/app/db")[0].starts_with(first_home.path()));

    env.set("HOME", &second_home.path().to_string_lossy());
    dirs.refresh().expect("refresh");

    let found = dirs.find_data_files("/app/db");
    assert_eq!(found.len(), 1, "old home is no longer searched");
    assert!(found[0].starts_with(second_home.path()));
}

#[test]
fn nothing_found_is_an_empty_result() {
    let home = TempDir::new().expect("home dir");

    let env = FakeEnv::default();
    env.set("HOME", &home.path().to_string_lossy());
    env.set("XDG_DATA_DIRS", &home.path().join("absent").to_string_lossy());

    let dirs = BaseDirectories::with_env(env).expect("resolve");

    assert!(dirs.find_data_files("/app/never-written").is_empty());
    assert!(
        dirs.open_data_file("/app/never-written", OpenOptions::new().read(true))
            .is_none()
    );
}
