#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any document either fails to parse or builds a consistent forest
        if let Ok(areas) = areatree::input::parse_areas(content) {
            let mut forest = areatree::build_forest(areas, Vec::<String>::new());
            assert!(forest.inconsistencies().is_empty());

            for id in forest.depth_first() {
                forest.toggle(id);
            }
            assert!(forest.inconsistencies().is_empty());
        }
    }
});
