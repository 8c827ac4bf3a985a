use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

use dynarr::{DynamicArray, Incremental};
use dynarr_log::ColorSpec;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl termcolor::WriteColor for Capture {

    fn supports_color(&self) -> bool {
        false
    }

    fn set_color(&mut self, _: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn storage_events_are_traced() {
    dynarr_log::init_with_filters("trace");
    assert!(dynarr_log::is_initialized());
    let capture = Capture::default();
    dynarr_log::set_writer(capture.clone()).unwrap();
    dynarr_log::set_filters("dynarr=trace").unwrap();
    assert!(dynarr_log::enabled("dynarr::vec_types::dyn_array", dynarr_log::Level::Trace));

    let mut arr = DynamicArray::<i32, Incremental>::new();
    arr.push_back(1).unwrap();
    arr.push_back(2).unwrap();
    assert_eq!(arr.reserve(8), Ok(false));
    let copy = arr.try_clone().unwrap();
    let mut target = DynamicArray::<i32, Incremental>::with_data(3, &[7, 8, 9]).unwrap();
    target.clone_from(&copy);
    arr.clear();

    let output = String::from_utf8(capture.0.lock().clone()).unwrap();
    assert!(output.contains("[TRACE] reallocated 0 slots to 1, moved 0 elements"));
    assert!(output.contains("[TRACE] reallocated 1 slots to 2, moved 1 elements"));
    assert!(output.contains("[DEBUG] reserve of 8 slots ignored, 2 already allocated"));
    assert!(output.contains("[TRACE] allocated 3 slots for copied data"));
    assert_eq!(output.matches("[TRACE] allocated 2 slots for clone").count(), 2);
    assert!(output.contains("[TRACE] released 3 slots"));
    assert!(output.contains("[TRACE] released 2 slots"));

    dynarr_log::set_filters("dynarr=warn").unwrap();
    assert!(!dynarr_log::enabled("dynarr::vec_types::dyn_array", dynarr_log::Level::Debug));
}
