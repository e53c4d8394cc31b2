//! Binary morphology regression test
//!
//! Tests erosion, dilation, opening, closing and boundary extraction on
//! synthetic binary rasters.
//!
//! Run with:
//! ```
//! cargo test -p pdi-morph --test binmorph_reg
//! ```

use pdi_core::Raster;
use pdi_morph::{
    BoundaryType, Sel, close, dilate, erode, external_boundary, extract_boundary,
    internal_boundary, open,
};
use pdi_test::{RegParams, count_value, fixtures};

/// Check that `a == 255` implies `b == 255` for every pixel in the interior.
fn contained_in(a: &Raster, b: &Raster, r: u32) -> bool {
    let mut ok = true;
    for y in r..a.height() - r {
        for x in r..a.width() - r {
            if a.get_sample(x, y, 0) == Some(255) {
                ok &= b.get_sample(x, y, 0) == Some(255);
            }
        }
    }
    ok
}

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");
    let square = Sel::create_square(3);
    let cross = Sel::create_cross(3);

    // --- Test 1: isolated dot ---
    let dot = fixtures::single_dot(21, 21, 10, 10).unwrap();
    rp.compare_values(0.0, count_value(&erode(&dot, &square), 255) as f64, 0.0);
    let grown = dilate(&dot, &square);
    rp.compare_values(9.0, count_value(&grown, 255) as f64, 0.0);
    rp.compare_rasters(&fixtures::filled_square(21, 21, 9, 9, 3).unwrap(), &grown);
    rp.compare_values(5.0, count_value(&dilate(&dot, &cross), 255) as f64, 0.0);

    // A corner dot only reaches the first computed pixel.
    let corner = fixtures::single_dot(21, 21, 0, 0).unwrap();
    let clipped = dilate(&corner, &square);
    rp.compare_values(1.0, count_value(&clipped, 255) as f64, 0.0);
    rp.compare_values(255.0, clipped.get_sample(1, 1, 0).unwrap() as f64, 0.0);

    // --- Test 2: erosion shrinks, dilation grows ---
    let checker = fixtures::checker(32, 32, 4).unwrap();
    let eroded = erode(&checker, &square);
    let dilated = dilate(&checker, &square);
    let orig_count = count_value(&checker, 255);
    let eroded_count = count_value(&eroded, 255);
    eprintln!(
        "  checker: {} foreground, {} after erosion",
        orig_count, eroded_count
    );
    rp.compare_values(1.0, if eroded_count <= orig_count { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if contained_in(&eroded, &checker, 0) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if contained_in(&checker, &dilated, 1) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: duality in the interior ---
    for sel in [&square, &cross, &Sel::create_square(5)] {
        let r = sel.radius();
        let lhs = dilate(&checker, sel);
        let rhs = erode(&checker.invert(), sel).invert();
        let mut same = true;
        for y in r..32 - r {
            for x in r..32 - r {
                same &= lhs.get_sample(x, y, 0) == rhs.get_sample(x, y, 0);
            }
        }
        rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 4: opening removes small features and is idempotent ---
    let block = fixtures::filled_square(40, 40, 10, 10, 12).unwrap();
    let speckled = block.arith_add(&fixtures::single_dot(40, 40, 30, 30).unwrap());
    let opened = open(&speckled, &square);
    rp.compare_rasters(&block, &opened);
    rp.compare_rasters(&opened, &open(&opened, &square));

    // --- Test 5: closing fills small holes and is idempotent ---
    let mut holed = block.to_mut();
    holed.set_sample_unchecked(15, 15, 0, 0);
    let holed: Raster = holed.into();
    let closed = close(&holed, &square);
    rp.compare_rasters(&block, &closed);
    rp.compare_rasters(&closed, &close(&closed, &square));

    // --- Test 6: boundary decomposition ---
    let inner = internal_boundary(&checker, &square);
    let outer = external_boundary(&checker, &square);
    rp.compare_values(1.0, if contained_in(&inner, &checker, 0) { 1.0 } else { 0.0 }, 0.0);
    let background = checker.invert();
    rp.compare_values(1.0, if contained_in(&outer, &background, 0) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_rasters(&inner, &extract_boundary(&checker, &square, BoundaryType::Inner));
    rp.compare_rasters(&outer, &extract_boundary(&checker, &square, BoundaryType::Outer));

    // A 12x12 block has a one-pixel ring on each side.
    rp.compare_values(44.0, count_value(&internal_boundary(&block, &square), 255) as f64, 0.0);
    rp.compare_values(52.0, count_value(&external_boundary(&block, &square), 255) as f64, 0.0);

    // --- Test 7: an even size falls back to 3 ---
    rp.compare_rasters(&erode(&checker, &square), &erode(&checker, &Sel::create_square(4)));

    assert!(rp.cleanup(), "binmorph regression test failed");
}
