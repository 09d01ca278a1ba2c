use std::collections::HashSet;

use test_fixtures::{list_fixtures, load_listing};

#[test]
fn every_listing_snapshot_is_consistent() {
    let files = list_fixtures("listings");
    assert!(files.len() >= 2, "expected listing snapshots, found {files:?}");

    for file in files {
        let name = file.file_stem().unwrap().to_string_lossy().to_string();
        let snapshot = load_listing(&name);
        let ids: HashSet<&str> = snapshot.items.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids.len(), snapshot.items.len(), "{name}: duplicate ids");
        for order in [&snapshot.expected_freshness_order, &snapshot.expected_newest_order] {
            assert_eq!(order.len(), ids.len(), "{name}: order length");
            assert!(order.iter().all(|id| ids.contains(id.as_str())), "{name}: unknown id");
        }
    }
}
