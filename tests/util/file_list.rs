// Integration tests for util::create_file_list.

use std::fs;

use lz4_block::util::create_file_list;
use tempfile::TempDir;

#[test]
fn mixed_inputs_keep_argument_order() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("z.bin"), b"z").unwrap();
    fs::write(sub.join("y.bin"), b"y").unwrap();
    let loose = dir.path().join("loose.bin");
    fs::write(&loose, b"l").unwrap();

    let list = create_file_list(&[loose.as_path(), sub.as_path()], false).unwrap();
    assert_eq!(list, vec![loose.clone(), sub.join("y.bin"), sub.join("z.bin")]);
}

#[test]
fn nested_levels_need_recursion() {
    let dir = TempDir::new().unwrap();
    let deep = dir.path().join("a/b/c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.bin"), b"leaf").unwrap();

    assert!(create_file_list(&[dir.path()], false).unwrap().is_empty());
    assert_eq!(create_file_list(&[dir.path()], true).unwrap(), vec![deep.join("leaf.bin")]);
}
