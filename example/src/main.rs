use dynarr::{
    DynamicArray,
    Doubling,
    Incremental,
    CapacityPolicy,
    CapacityError,
};

use dynarr_log::{info, error};

fn push_three<P: CapacityPolicy>(name: &str) -> Result<DynamicArray<i32, P>, CapacityError> {
    let mut arr = DynamicArray::<i32, P>::new();
    for value in [10, 20, 30] {
        arr.push_back(value)?;
        info!("{}: pushed {}, size {} capacity {}", name, value, arr.size(), arr.capacity());
    }
    Ok(arr)
}

fn walk(arr: &DynamicArray<i32, Incremental>) {
    let end = arr.end();
    let mut cursor = arr.begin();
    while cursor != end {
        if let Some(value) = cursor.post_inc().get() {
            info!("cursor at {}: {}", cursor.position() - 1, value);
        }
    }
}

fn run() -> Result<(), CapacityError> {
    let incremental = push_three::<Incremental>("incremental")?;
    let doubling = push_three::<Doubling>("doubling")?;
    walk(&incremental);

    let mut copy = incremental.clone();
    copy[0] = 11;
    info!("copy {:?} < original {:?}: {}", copy, incremental, copy < incremental);
    info!("doubling holds the same values: {}", doubling.as_slice() == incremental.as_slice());

    let mut reserved = DynamicArray::<i32>::new();
    info!("first reserve took effect: {}", reserved.reserve(4)?);
    info!("second reserve took effect: {}", reserved.reserve(16)?);

    if let Err(err) = incremental.at(3) {
        info!("at(3) failed as expected: {}", err);
    }
    Ok(())
}

fn main() {
    dynarr_log::init();
    if let Err(err) = dynarr_log::info_fmt(|fmt| {
        fmt.text("[dynarr] ", |spec| spec).message(|spec| spec);
    }) {
        eprintln!("failed to set log format: {}", err);
        return
    }
    if let Err(err) = run() {
        error!("walkthrough failed: {}", err);
    }
}
