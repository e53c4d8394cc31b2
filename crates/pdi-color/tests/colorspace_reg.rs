//! Grayscale conversion and channel isolation regression test

use pdi_color::{
    ColorChannel, GrayMethod, isolate, isolate_channel, to_average, to_gray, to_weighted,
};
use pdi_test::{RegParams, fixtures};

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    let ramp = fixtures::color_ramp(64, 32).unwrap();

    // --- Test 1: single-channel reductions ---
    for method in [GrayMethod::Average, GrayMethod::Weighted] {
        let gray = to_gray(&ramp, method);
        rp.compare_values(1.0, gray.channels().count() as f64, 0.0);
        rp.compare_values(64.0, gray.width() as f64, 0.0);
        rp.compare_values(32.0, gray.height() as f64, 0.0);
    }

    // --- Test 2: known pixels ---
    // (0, 0): B=0, G=0, R=200
    let avg = to_gray(&ramp, GrayMethod::Average);
    let weighted = to_gray(&ramp, GrayMethod::Weighted);
    rp.compare_values(66.0, avg.get_sample(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(59.0, weighted.get_sample(0, 0, 0).unwrap() as f64, 0.0);
    // (63, 31): B=255, G=255, R=200
    rp.compare_values(236.0, avg.get_sample(63, 31, 0).unwrap() as f64, 0.0);
    rp.compare_values(238.0, weighted.get_sample(63, 31, 0).unwrap() as f64, 0.0);

    // --- Test 3: replicated variants match the single-channel values ---
    let avg3 = to_average(&ramp);
    let weighted3 = to_weighted(&ramp);
    rp.compare_values(3.0, avg3.channels().count() as f64, 0.0);
    let mut same = true;
    for y in 0..ramp.height() {
        for x in 0..ramp.width() {
            let a = avg.get_sample(x, y, 0).unwrap();
            let w = weighted.get_sample(x, y, 0).unwrap();
            same &= avg3.get_pixel(x, y) == Some(&[a, a, a][..]);
            same &= weighted3.get_pixel(x, y) == Some(&[w, w, w][..]);
        }
    }
    rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: gray input is passed through ---
    let grad = fixtures::gradient(16, 4).unwrap();
    rp.compare_rasters(&grad, &to_gray(&grad, GrayMethod::Weighted));
    rp.compare_rasters(&grad, &to_average(&grad));

    // --- Test 5: channel isolation keeps exactly one channel ---
    for channel in [ColorChannel::Blue, ColorChannel::Green, ColorChannel::Red] {
        let iso = isolate(&ramp, channel).unwrap();
        rp.compare_values(3.0, iso.channels().count() as f64, 0.0);
        let mut ok = true;
        for y in 0..ramp.height() {
            for x in 0..ramp.width() {
                for c in 0..3 {
                    let expected = if c == channel.index() {
                        ramp.get_sample(x, y, c).unwrap()
                    } else {
                        0
                    };
                    ok &= iso.get_sample(x, y, c) == Some(expected);
                }
            }
        }
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 6: invalid channel indices ---
    rp.compare_values(1.0, if isolate_channel(&ramp, 5).is_err() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if isolate_channel(&grad, 1).is_err() { 1.0 } else { 0.0 }, 0.0);
    let copy = isolate_channel(&grad, 0).unwrap();
    rp.compare_values(1.0, copy.channels().count() as f64, 0.0);
    rp.compare_rasters(&grad, &copy);

    assert!(rp.cleanup(), "colorspace regression test failed");
}
