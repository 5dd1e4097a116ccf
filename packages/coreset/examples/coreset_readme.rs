//! Example that demonstrates converting one core set between all supported forms.

use coreset::{CoreSet, RangeStyle};

fn main() {
    println!("=== CoreSet README Example ===");

    let cores = CoreSet::from_description("50,21,0,10-12,15,16,20-18").unwrap();
    assert_eq!(cores.to_range_string(), "0,10-12,15-16,18-21,50");

    println!("Cores: {cores}");
    println!("As list: {}", cores.to_list());
    println!("As mask: {}", cores.to_hex());
    println!(
        "With pairs as list: {}",
        cores.to_range_string_with(RangeStyle::PairAsList)
    );

    let from_mask = CoreSet::from_hex(&cores.to_hex()).unwrap();
    assert_eq!(from_mask, cores);

    println!("README example completed successfully!");
}
