#[test]
fn is_usable_in_const_contexts() {
    const _TABLE1: memsim::BlockTable<32, 8> = memsim::BlockTable::new();
    static _TABLE2: memsim::Megabyte = memsim::Megabyte::new();
}

#[test]
fn default_geometry_is_one_megabyte() {
    let table = memsim::Megabyte::default();
    assert_eq!(table.capacity(), 1024 * 1024);
    assert_eq!(memsim::NUM_BLOCKS * memsim::BLOCK_SIZE, table.capacity());
}

#[test]
#[should_panic(expected = "too few blocks")]
fn at_least_one_block() {
    let _table = memsim::BlockTable::<0, 512>::new(); // panic here
}

#[test]
#[should_panic(expected = "too small blocks")]
fn blocks_must_not_be_empty() {
    let _table = memsim::BlockTable::<16, 0>::new(); // panic here
}
