use num_bigint::BigUint;

use crate::Item;

/// Returns the ids of all set bits in the mask, in ascending order.
///
/// The scan covers bit 0 up to and including the highest set bit.
pub(crate) fn items_from_mask(mask: &BigUint) -> Vec<Item> {
    (0..mask.bits())
        .filter(|&bit| mask.bit(bit))
        // A mask with bits above `Item::MAX` would be half a gigabyte in size. Such bits have no
        // core id to map to and are dropped.
        .filter_map(|bit| Item::try_from(bit).ok())
        .collect()
}

/// Builds a mask with bit `i` set for every id `i` in `items`.
pub(crate) fn mask_from_items(items: &[Item]) -> BigUint {
    let mut mask = BigUint::default();

    for &item in items {
        mask.set_bit(u64::from(item), true);
    }

    mask
}
