//! Integration tests for pointer-chain resolution over an emulated target

use bedrock_trainer::{resolve_chain, Address, EmulatedProcess, MemoryError, OffsetChain};
use bedrock_trainer::{PatchEngine, ProcessMemory};

#[test]
fn empty_chain_returns_base_unchanged() {
    let target = EmulatedProcess::new(Address::new(0x10000), 64);

    let base = Address::new(0xCAFE_0000);
    let resolved = resolve_chain(&target, base, &OffsetChain::empty()).unwrap();
    assert_eq!(resolved, base);
}

#[test]
fn three_level_chain_over_synthetic_layout() {
    // Layout: base+o1 holds p1, p1+o2 holds p2, result is p2+o3
    let target = EmulatedProcess::new(Address::new(0x10000), 0x400);
    let base = target.base();
    let (o1, o2, o3) = (0x18, 0x40, 0xC);

    let p1 = Address::new(0x10100);
    let p2 = Address::new(0x10200);
    target.plant_pointer(base.add(o1), p1).unwrap();
    target.plant_pointer(p1.add(o2), p2).unwrap();

    let resolved =
        resolve_chain(&target, base, &OffsetChain::new(vec![o1, o2, o3])).unwrap();
    assert_eq!(resolved, p2.add(o3));
}

#[test]
fn final_offset_is_never_dereferenced() {
    let target = EmulatedProcess::new(Address::new(0x10000), 0x100);
    // The slot at base+0x20 holds garbage that is not a valid pointer;
    // a single-offset chain must not read it
    target
        .write_bytes(Address::new(0x10020), &[0xFF; 8])
        .unwrap();

    let resolved =
        resolve_chain(&target, target.base(), &OffsetChain::new(vec![0x20])).unwrap();
    assert_eq!(resolved, Address::new(0x10020));
}

#[test]
fn broken_chain_reports_failing_level() {
    let target = EmulatedProcess::new(Address::new(0x10000), 0x100);
    // Level 0 read succeeds and yields an unmapped pointer
    target
        .plant_pointer(Address::new(0x10008), Address::new(0xDEAD_0000))
        .unwrap();

    let err = resolve_chain(
        &target,
        target.base(),
        &OffsetChain::new(vec![0x8, 0x10, 0x18]),
    )
    .unwrap_err();

    match err {
        MemoryError::PointerChainBroken { level, reason } => {
            assert_eq!(level, 1);
            assert!(reason.contains("0x"));
        }
        other => panic!("expected PointerChainBroken, got {other:?}"),
    }
}

#[test]
fn unreadable_first_slot_fails_at_level_zero() {
    let target = EmulatedProcess::new(Address::new(0x10000), 0x10);

    let err = resolve_chain(
        &target,
        Address::new(0x9_0000),
        &OffsetChain::new(vec![0x0, 0x8]),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        MemoryError::PointerChainBroken { level: 0, .. }
    ));
}

#[test]
fn end_to_end_resolve_then_patch() {
    // Pointer at offset 16 into a second area, chain [16, 24], patch
    // 0xDEADBEEF at the resolved address and read it back byte-identical
    let target = EmulatedProcess::new(Address::new(0x20000), 0x200);
    let second_buffer = Address::new(0x20100);
    target
        .plant_pointer(target.base().add(16), second_buffer)
        .unwrap();

    let resolved =
        resolve_chain(&target, target.base(), &OffsetChain::new(vec![16, 24])).unwrap();
    assert_eq!(resolved, second_buffer.add(24));

    let engine = PatchEngine::new(&target);
    let value = 0xDEAD_BEEFu32.to_le_bytes();
    engine.patch(resolved, &value).unwrap();

    let mut readback = [0u8; 4];
    target.read_bytes(resolved, &mut readback).unwrap();
    assert_eq!(readback, value);
}

#[test]
fn chains_sharing_a_prefix_resolve_independently() {
    let target = EmulatedProcess::new(Address::new(0x30000), 0x200);
    let shared = Address::new(0x30080);
    target.plant_pointer(target.base().add(0x10), shared).unwrap();

    let a = resolve_chain(&target, target.base(), &OffsetChain::new(vec![0x10, 0x4])).unwrap();
    let b = resolve_chain(&target, target.base(), &OffsetChain::new(vec![0x10, 0x24])).unwrap();

    assert_eq!(a, shared.add(0x4));
    assert_eq!(b, shared.add(0x24));
}
