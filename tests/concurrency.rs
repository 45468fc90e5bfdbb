use std::thread;

use cmaj_web_assets::{find_resource, PATCH_VIEW_ASSETS};

#[test]
fn concurrent_lookups_see_the_same_table() {
    let expected: Vec<_> = PATCH_VIEW_ASSETS
        .files()
        .iter()
        .map(|file| (file.name, file.content))
        .collect();

    thread::scope(|s| {
        for t in 0..8 {
            let expected = &expected;
            s.spawn(move || {
                for round in 0..200 {
                    let (name, content) = expected[(t + round) % expected.len()];
                    assert_eq!(find_resource(name), content);
                    assert!(find_resource("missing.js").is_empty());
                }
            });
        }
    });
}

#[test]
fn registry_is_shareable() {
    fn assert_sync<T: Sync + Send>(_: &T) {}
    assert_sync(&PATCH_VIEW_ASSETS);
}
