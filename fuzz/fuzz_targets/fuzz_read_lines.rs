#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any text must read without panicking
    let text = String::from_utf8_lossy(data);
    let model = view3d::Model::parse(&text);

    // A model without errors has every reference resolved
    if model.is_valid() {
        for surface in model.surfaces() {
            assert!(model.surface_vertices(surface).is_some());
            assert!(!surface.base.is_unresolved());
            assert!(!surface.combine.is_unresolved());
        }
    }
});
